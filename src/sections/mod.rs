//! Password evaluation sections
//!
//! Each section checks one aspect of password strength and either passes
//! or returns an improvement tip.

mod blacklist;
mod length;
mod variety;

pub use blacklist::blacklist_section;
pub use length::{MIN_LENGTH, length_section};
pub use variety::{case_section, digit_section, special_section};

/// Result type for section evaluation functions.
/// - `Some(tip)` - Section failed, with a tip on how to fix it
/// - `None` - Section passed
pub type SectionResult = Option<String>;
