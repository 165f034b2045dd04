//! Strength checker - the entry point behind the "check password" action.
//!
//! Validates the input, evaluates it and decides whether a replacement
//! password is offered.

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::evaluator::evaluate_password_strength;
use crate::suggest::suggest_for_secret;
use crate::types::StrengthReport;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CheckError {
    #[error("Please enter a password to check its strength.")]
    EmptyPassword,
}

/// Evaluation result plus an optional stronger replacement.
#[derive(Debug)]
pub struct CheckOutcome {
    pub report: StrengthReport,
    /// Present for `Weak` and `Moderate` reports only.
    pub suggestion: Option<SecretString>,
}

/// Checks a password using the thread RNG for the suggestion.
pub fn check_password(password: &SecretString) -> Result<CheckOutcome, CheckError> {
    check_password_with(password, &mut rand::thread_rng())
}

/// Checks a password.
///
/// # Errors
///
/// Returns [`CheckError::EmptyPassword`] if the input is empty; nothing is
/// evaluated in that case.
pub fn check_password_with<R: Rng + ?Sized>(
    password: &SecretString,
    rng: &mut R,
) -> Result<CheckOutcome, CheckError> {
    if password.expose_secret().is_empty() {
        return Err(CheckError::EmptyPassword);
    }

    let report = evaluate_password_strength(password);
    let suggestion = report
        .category
        .offers_suggestion()
        .then(|| suggest_for_secret(password, rng));

    Ok(CheckOutcome { report, suggestion })
}
