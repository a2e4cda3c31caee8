//! Response preference detection.
//!
//! Classifies free-text requests as preferring visual, text or mixed
//! responses, with a deterministic keyword and phrase scorer.

pub mod config;
pub mod error;
pub mod logging;
pub mod preference;
pub mod probe;

#[cfg(test)]
mod tests;

pub use error::AppError;
pub use preference::{
    analyze_strength, classify, Preference, PreferenceClassifier, PreferenceResult,
    StrengthReport, Vocabulary,
};
