//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    SectionResult, blacklist_section, case_section, digit_section, length_section,
    special_section,
};
use crate::types::{Category, Score, StrengthReport};

/// Scoring sections with the points each one awards when it passes.
const SECTIONS: [(&str, u8, fn(&SecretString) -> SectionResult); 4] = [
    ("length", 2, length_section),
    ("case", 1, case_section),
    ("digit", 1, digit_section),
    ("special", 1, special_section),
];

/// Evaluates password strength.
///
/// Blacklisted passwords score 0 and are reported as `VeryWeak` with a
/// single tip. Otherwise each section adds its points or contributes a tip,
/// and the total is mapped onto a [`Category`]. `Strong` reports carry no
/// tips.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthReport {
    if let Some(tip) = blacklist_section(password) {
        #[cfg(feature = "tracing")]
        tracing::debug!("password rejected by blacklist");
        return StrengthReport {
            score: Score::new(0),
            category: Category::VeryWeak,
            tips: vec![tip],
        };
    }

    let mut points = 0;
    let mut tips = Vec::new();

    for (_section_name, section_points, section_fn) in SECTIONS {
        match section_fn(password) {
            Some(tip) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("section {} failed", _section_name);
                tips.push(tip);
            }
            None => points += section_points,
        }
    }

    let score = Score::new(points);
    let category = Category::from_score(score);
    if category == Category::Strong {
        tips.clear();
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("password evaluated: score {}, category {}", score, category);

    StrengthReport {
        score,
        category,
        tips,
    }
}

/// Delay before an edit is evaluated, so rapid typing only evaluates once.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async version that sends the report via channel after a debounce delay.
///
/// Nothing is sent if `token` is cancelled before the delay elapses.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let report = evaluate_password_strength(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password strength report: {}", _e);
    }
}
