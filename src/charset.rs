//! Character pool building for password generation.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
/// Full ASCII punctuation, drawn from by the generator.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
/// Characters the strength checks count as special.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()";

/// Characters eligible for random selection.
///
/// Always holds both letter cases, so it is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn new(include_digits: bool, include_special: bool) -> Self {
        let mut chars: Vec<char> = LETTERS.chars().collect();

        if include_digits {
            chars.extend(DIGITS.chars());
        }

        if include_special {
            chars.extend(PUNCTUATION.chars());
        }

        CharacterPool { chars }
    }

    pub fn from_options(options: &crate::GeneratorOptions) -> Self {
        Self::new(options.include_digits, options.include_special)
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}
