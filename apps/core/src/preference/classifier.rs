//! Preference classification using keyword counts and phrase patterns.
//!
//! Keywords add one point per whole-word occurrence. Phrase patterns add
//! their weight once when present, however often they could match.
//! No ML model, no I/O, no shared mutable state.

use serde_json::Value;
use tracing::{debug, trace};

use super::types::{Preference, PreferenceResult, ScoreTriple, Signal, SignalSource};
use super::vocabulary::Vocabulary;

/// Confidence ceiling for every decision
pub const MAX_CONFIDENCE: f64 = 0.9;

/// Preference classifier over a fixed rule table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferenceClassifier {
    vocabulary: Vocabulary,
}

impl PreferenceClassifier {
    /// Create a classifier on the compact table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }

    /// Classify the preferred response style of a text
    pub fn classify(&self, text: &str) -> PreferenceResult {
        if text.is_empty() {
            return PreferenceResult::unscored();
        }

        let lowered = text.to_lowercase();
        let (scores, signals) = self.collect(&lowered);
        let (preference, confidence) = decide(&scores);

        debug!(
            vocabulary = %self.vocabulary,
            visual = scores.visual,
            text = scores.text,
            mixed = scores.mixed,
            %preference,
            confidence,
            "Preference classified"
        );

        PreferenceResult {
            preference,
            confidence: Some(confidence),
            scores: Some(scores),
            signals,
        }
    }

    /// Classify text that may be missing
    pub fn classify_opt(&self, text: Option<&str>) -> PreferenceResult {
        match text {
            Some(text) => self.classify(text),
            None => PreferenceResult::unscored(),
        }
    }

    /// Classify an arbitrary JSON value; anything but a string is unscored
    pub fn classify_value(&self, value: &Value) -> PreferenceResult {
        match value {
            Value::String(text) => self.classify(text),
            other => {
                trace!(kind = value_kind(other), "Non-string input left unscored");
                PreferenceResult::unscored()
            }
        }
    }

    /// Raw score triple, or `None` for empty input
    pub fn score(&self, text: &str) -> Option<ScoreTriple> {
        if text.is_empty() {
            return None;
        }
        Some(self.collect(&text.to_lowercase()).0)
    }

    fn collect(&self, lowered: &str) -> (ScoreTriple, Vec<Signal>) {
        let table = self.vocabulary.table();
        let mut scores = ScoreTriple::default();
        let mut signals = Vec::new();

        for rule in &table.keywords {
            let occurrences = rule.regex.find_iter(lowered).count() as u32;
            if occurrences > 0 {
                scores.add(rule.category, occurrences);
                signals.push(Signal {
                    category: rule.category,
                    source: SignalSource::Keyword,
                    term: rule.keyword.to_string(),
                    points: occurrences,
                });
            }
        }

        // Presence only: a phrase adds its weight at most once
        for rule in &table.phrases {
            if let Some(m) = rule.regex.find(lowered) {
                scores.add(rule.category, rule.weight);
                signals.push(Signal {
                    category: rule.category,
                    source: SignalSource::Phrase,
                    term: m.as_str().to_string(),
                    points: rule.weight,
                });
            }
        }

        (scores, signals)
    }
}

/// Apply the decision policy to a score triple.
///
/// Branches are checked in order and every comparison is strict, so ties
/// fall through to `Absent` with zero confidence.
pub fn decide(scores: &ScoreTriple) -> (Preference, f64) {
    let v = scores.visual;
    let t = scores.text;
    let m = scores.mixed;

    if m > 0 && v > 0 && t > 0 {
        (Preference::Mixed, capped(0.4 + f64::from(m) * 0.2))
    } else if m > v.max(t) {
        (Preference::Mixed, capped(0.3 + f64::from(m) * 0.2))
    } else if v > t && v > m {
        (Preference::Visual, capped(0.3 + f64::from(v) * 0.15))
    } else if t > v && t > m {
        (Preference::Text, capped(0.3 + f64::from(t) * 0.15))
    } else {
        (Preference::Absent, 0.0)
    }
}

fn capped(confidence: f64) -> f64 {
    confidence.min(MAX_CONFIDENCE)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Classify with the compact table
pub fn classify(text: &str) -> PreferenceResult {
    PreferenceClassifier::new().classify(text)
}
