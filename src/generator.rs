//! Random password generation from a configurable character pool.

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

use crate::charset::CharacterPool;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OptionsError {
    #[error(
        "Password length {0} is out of range ({min}-{max})",
        min = GeneratorOptions::MIN_LENGTH,
        max = GeneratorOptions::MAX_LENGTH
    )]
    LengthOutOfRange(usize),
}

/// Options accepted by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub length: usize,
    pub include_digits: bool,
    pub include_special: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            include_digits: false,
            include_special: false,
        }
    }
}

impl GeneratorOptions {
    pub const MIN_LENGTH: usize = 6;
    pub const MAX_LENGTH: usize = 20;
    pub const DEFAULT_LENGTH: usize = 13;

    /// Builds options, rejecting lengths outside `MIN_LENGTH..=MAX_LENGTH`.
    pub fn new(
        length: usize,
        include_digits: bool,
        include_special: bool,
    ) -> Result<Self, OptionsError> {
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            return Err(OptionsError::LengthOutOfRange(length));
        }
        Ok(Self {
            length,
            include_digits,
            include_special,
        })
    }
}

/// Generates a password using the thread-local RNG.
pub fn generate_password(options: &GeneratorOptions) -> SecretString {
    generate_password_with(options, &mut rand::thread_rng())
}

/// Generates a password drawing each character independently and uniformly
/// from the configured pool.
pub fn generate_password_with<R: Rng + ?Sized>(
    options: &GeneratorOptions,
    rng: &mut R,
) -> SecretString {
    let pool = CharacterPool::from_options(options);
    let chars = pool.as_slice();

    let password: String = (0..options.length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();

    SecretString::new(password.into())
}
