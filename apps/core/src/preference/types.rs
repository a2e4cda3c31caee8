//! Result types for preference detection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Detected response preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// Big charts and graphs first, brief text
    Visual,
    /// Detailed written explanations, small supporting charts
    Text,
    /// Balanced mix of charts and text
    Mixed,
    /// No usable signal in the input
    Absent,
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Preference {
    /// Returns the machine label for the preference
    pub fn label(&self) -> &'static str {
        match self {
            Preference::Visual => "visual",
            Preference::Text => "text",
            Preference::Mixed => "mixed",
            Preference::Absent => "absent",
        }
    }

    /// Human-readable description shown next to the personalization field
    pub fn display_text(&self) -> &'static str {
        match self {
            Preference::Visual => "Visual content (big charts, graphs, brief summary text)",
            Preference::Text => {
                "Text-based content (detailed explanations, small supporting charts)"
            }
            Preference::Mixed => "Balanced content (equal mix of charts, graphs and text)",
            Preference::Absent => "No specific preference detected",
        }
    }

    /// Badge color tag for the preference
    pub fn display_color(&self) -> &'static str {
        match self {
            Preference::Visual => "bg-blue-500",
            Preference::Text => "bg-green-500",
            Preference::Mixed => "bg-purple-500",
            Preference::Absent => "bg-gray-400",
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Preference::Absent)
    }
}

/// Scoring category a keyword or phrase contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Visual,
    Text,
    Mixed,
}

/// Where a signal came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalSource {
    Keyword,
    Phrase,
}

/// A keyword or phrase hit that contributed to a score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub category: Category,
    pub source: SignalSource,
    /// Keyword literal, or the text the phrase pattern matched
    pub term: String,
    /// Points added (occurrence count for keywords, fixed weight for phrases)
    pub points: u32,
}

/// Per-call accumulators, one per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTriple {
    pub visual: u32,
    pub text: u32,
    pub mixed: u32,
}

impl ScoreTriple {
    pub(crate) fn add(&mut self, category: Category, points: u32) {
        match category {
            Category::Visual => self.visual += points,
            Category::Text => self.text += points,
            Category::Mixed => self.mixed += points,
        }
    }

    pub fn total(&self) -> u32 {
        self.visual + self.text + self.mixed
    }
}

/// Result of preference classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceResult {
    /// Detected preference
    pub preference: Preference,
    /// Heuristic strength (0.0 - 0.9); absent when no scoring was attempted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Final score triple; absent when no scoring was attempted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreTriple>,
    /// Hits that fed the scores
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signals: Vec<Signal>,
}

impl PreferenceResult {
    /// The result for input that could not be scored at all
    pub fn unscored() -> Self {
        Self {
            preference: Preference::Absent,
            confidence: None,
            scores: None,
            signals: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preference_has_display_text_and_color() {
        let all = [
            Preference::Visual,
            Preference::Text,
            Preference::Mixed,
            Preference::Absent,
        ];
        for preference in all {
            assert!(!preference.display_text().is_empty());
            assert!(preference.display_color().starts_with("bg-"));
        }
        assert_eq!(Preference::Absent.display_text(), "No specific preference detected");
        assert_eq!(Preference::Absent.display_color(), "bg-gray-400");
        assert!(Preference::Absent.is_absent());
        assert!(!Preference::Mixed.is_absent());
    }

    #[test]
    fn test_unscored_result_serializes_without_confidence() {
        let json = serde_json::to_value(PreferenceResult::unscored()).unwrap();
        assert_eq!(json, serde_json::json!({ "preference": "absent" }));
    }

    #[test]
    fn test_score_triple_add() {
        let mut scores = ScoreTriple::default();
        scores.add(Category::Visual, 2);
        scores.add(Category::Mixed, 3);
        scores.add(Category::Visual, 1);
        assert_eq!(scores, ScoreTriple { visual: 3, text: 0, mixed: 3 });
        assert_eq!(scores.total(), 6);
    }
}
