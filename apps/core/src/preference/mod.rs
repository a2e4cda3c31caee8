//! # Preference Module
//!
//! Fast, deterministic detection of the response style a user asks for:
//! visual (charts first), text (detailed explanations), or mixed.
//!
//! ## Components
//! - `vocabulary`: Keyword and phrase tables (compact and extended)
//! - `classifier`: Scoring and the decision policy
//! - `strength`: Presence-based strength analysis with keyword density
//! - `types`: Result types and display mappings

pub mod classifier;
pub mod strength;
pub mod types;
pub mod vocabulary;

pub use classifier::{classify, decide, PreferenceClassifier, MAX_CONFIDENCE};
pub use strength::{analyze_strength, StrengthReport};
pub use types::{Category, Preference, PreferenceResult, ScoreTriple, Signal, SignalSource};
pub use vocabulary::Vocabulary;
