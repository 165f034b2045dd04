//! Character variety sections - letter case, digits and special characters.

use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::charset::SPECIAL_CHARS;

/// Any Unicode decimal digit (`\d` is Unicode-aware).
static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("digit pattern is valid"));

/// Passes when both an uppercase and a lowercase ASCII letter are present.
pub fn case_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    if !(has_upper && has_lower) {
        return Some("Include both uppercase and lowercase letters.".to_string());
    }
    None
}

/// Passes when at least one decimal digit is present, in any script.
pub fn digit_section(password: &SecretString) -> SectionResult {
    if !DIGIT_RE.is_match(password.expose_secret()) {
        return Some("Add at least one number (0-9).".to_string());
    }
    None
}

/// Passes when at least one of `!@#$%^&*()` is present.
pub fn special_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Some(format!(
            "Use at least one special character ({}).",
            SPECIAL_CHARS
        ));
    }
    None
}
