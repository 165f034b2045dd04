//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub const MIN_LENGTH: usize = 8;

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(format!(
            "Increase password length to at least {} characters.",
            MIN_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(
            length_section(&secret("Short1!")),
            Some("Increase password length to at least 8 characters.".to_string())
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section(&secret("12345678")), None);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 4 chars, 8 bytes
        assert!(length_section(&secret("éééé")).is_some());
        // 8 chars
        assert_eq!(length_section(&secret("éééééééé")), None);
    }
}
