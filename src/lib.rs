//! Password generation and strength checking library
//!
//! Generates random passwords from a configurable character pool, scores
//! passwords on a 0-5 scale with improvement tips, and suggests stronger
//! replacements for weak ones.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Optional file of extra common passwords, one per
//!   line, loaded by [`init_blacklist`]. The built-in list is always active.
//!
//! # Example
//!
//! ```rust
//! use pwd_toolkit::{Category, GeneratorOptions, check_password, generate_password};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let options = GeneratorOptions::new(16, true, true)?;
//! let generated = generate_password(&options);
//! assert_eq!(generated.expose_secret().len(), 16);
//!
//! let password = SecretString::new("abc".to_string().into());
//! let outcome = check_password(&password)?;
//! assert_eq!(outcome.report.category, Category::Weak);
//! assert!(outcome.suggestion.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Internal modules
mod blacklist;
mod charset;
mod checker;
mod evaluator;
mod generator;
mod sections;
mod suggest;
mod types;

// Public API
pub use blacklist::{
    BLACKLIST_PATH_ENV, BlacklistError, COMMON_PASSWORD_TIP, DEFAULT_BLACKLIST, get_blacklist,
    init_blacklist, init_blacklist_from_path, is_blacklisted,
};
pub use charset::{CharacterPool, PUNCTUATION, SPECIAL_CHARS};
pub use checker::{CheckError, CheckOutcome, check_password, check_password_with};
pub use evaluator::evaluate_password_strength;
pub use generator::{GeneratorOptions, OptionsError, generate_password, generate_password_with};
pub use suggest::{
    RANDOM_SEED, generate_strong_password, generate_strong_password_with, suggest_password,
    suggest_password_with,
};
pub use types::{Category, GaugeBand, Score, StrengthReport};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_strength_tx};
