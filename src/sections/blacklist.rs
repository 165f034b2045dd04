//! Blacklist section - checks if password is a known common password.

use crate::blacklist::{COMMON_PASSWORD_TIP, is_blacklisted};
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks the password against the blacklist.
///
/// A hit short-circuits the evaluation with a score of zero.
pub fn blacklist_section(password: &SecretString) -> SectionResult {
    if is_blacklisted(password.expose_secret()) {
        return Some(COMMON_PASSWORD_TIP.to_string());
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
    fn test_blacklist_section_common_password() {
        let result = blacklist_section(&secret("Welcome"));
        assert!(result.is_some_and(|tip| tip.contains("too common")));
    }

    #[test]
    fn test_blacklist_section_strong_password() {
        assert_eq!(blacklist_section(&secret("CorrectHorseBatteryStaple!123")), None);
    }
}
