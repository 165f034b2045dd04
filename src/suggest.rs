//! Suggestion builder - turns a weak password into one that passes every check.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::{ExposeSecret, SecretString};

use crate::charset::{DIGITS, LETTERS, LOWERCASE, SPECIAL_CHARS, UPPERCASE};
use crate::sections::MIN_LENGTH;

/// Seed used when a strong password is requested without any input.
pub const RANDOM_SEED: &str = "random";

fn pick<R: Rng + ?Sized>(set: &str, rng: &mut R) -> char {
    let bytes = set.as_bytes();
    bytes[rng.gen_range(0..bytes.len())] as char
}

/// Suggests a stronger password derived from `password`, using the thread RNG.
pub fn suggest_password(password: &str) -> SecretString {
    suggest_password_with(password, &mut rand::thread_rng())
}

/// Suggests a stronger password derived from `password`.
///
/// The input is padded with random letters up to the minimum length, then
/// one character of each class missing from the *input* is appended, and
/// the whole sequence is shuffled. The result is never truncated.
pub fn suggest_password_with<R: Rng + ?Sized>(password: &str, rng: &mut R) -> SecretString {
    let mut chars: Vec<char> = password.chars().collect();

    while chars.len() < MIN_LENGTH {
        chars.push(pick(LETTERS, rng));
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        chars.push(pick(UPPERCASE, rng));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        chars.push(pick(LOWERCASE, rng));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        chars.push(pick(DIGITS, rng));
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        chars.push(pick(SPECIAL_CHARS, rng));
    }

    chars.shuffle(rng);

    let suggestion: String = chars.into_iter().collect();
    SecretString::new(suggestion.into())
}

/// Suggests a replacement for a secret input.
pub fn suggest_for_secret<R: Rng + ?Sized>(password: &SecretString, rng: &mut R) -> SecretString {
    suggest_password_with(password.expose_secret(), rng)
}

/// Generates a strong password from scratch, using the thread RNG.
pub fn generate_strong_password() -> SecretString {
    generate_strong_password_with(&mut rand::thread_rng())
}

/// Generates a strong password from scratch by strengthening [`RANDOM_SEED`].
pub fn generate_strong_password_with<R: Rng + ?Sized>(rng: &mut R) -> SecretString {
    suggest_password_with(RANDOM_SEED, rng)
}
