//! Value types shared by the evaluator, the suggestion builder and the checker.

use std::fmt;

use crate::blacklist::COMMON_PASSWORD_TIP;

/// Strength score on a 0..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u8);

impl Score {
    /// Upper bound of the scale, also the gauge axis maximum.
    pub const MAX: u8 = 5;

    /// Creates a score, clamping values above [`Score::MAX`].
    pub fn new(value: u8) -> Self {
        Score(value.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Gauge color band for this score.
    pub fn band(self) -> GaugeBand {
        GaugeBand::for_score(self)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Strength category derived from a [`Score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Only produced for blacklisted passwords.
    VeryWeak,
    Weak,
    Moderate,
    Strong,
}

impl Category {
    /// Maps a score onto its category: 0-3 Weak, 4 Moderate, 5 Strong.
    ///
    /// `VeryWeak` is never returned here; it is reserved for blacklist hits.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            0..=3 => Category::Weak,
            4 => Category::Moderate,
            _ => Category::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::VeryWeak => "Very Weak",
            Category::Weak => "Weak",
            Category::Moderate => "Moderate",
            Category::Strong => "Strong",
        }
    }

    /// Message shown next to the report.
    ///
    /// `VeryWeak` has no message of its own and repeats the blacklist tip.
    pub fn verdict(self) -> &'static str {
        match self {
            Category::VeryWeak => COMMON_PASSWORD_TIP,
            Category::Weak => "Your password is weak! Improve it with the suggestions below:",
            Category::Moderate => "Your password is moderate. Consider strengthening it!",
            Category::Strong => "Great job! Your password is strong and secure.",
        }
    }

    /// Whether the checker offers a replacement password for this category.
    pub fn offers_suggestion(self) -> bool {
        matches!(self, Category::Weak | Category::Moderate)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Color band of the strength gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GaugeBand {
    Red,
    Yellow,
    Green,
}

impl GaugeBand {
    /// `[0, 2)` red, `[2, 4)` yellow, `[4, 5]` green.
    pub fn for_score(score: Score) -> Self {
        match score.value() {
            0..=1 => GaugeBand::Red,
            2..=3 => GaugeBand::Yellow,
            _ => GaugeBand::Green,
        }
    }
}

/// Result of evaluating a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: Score,
    pub category: Category,
    /// Improvement tips, in section order. Always empty for `Strong`.
    pub tips: Vec<String>,
}

impl StrengthReport {
    pub fn is_strong(&self) -> bool {
        self.category == Category::Strong
    }
}
