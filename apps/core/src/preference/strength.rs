//! Preference strength analysis.
//!
//! A simpler, presence-based variant of the classifier that reports which
//! keywords were found and folds keyword density into the confidence.
//! Only visual and text keywords are considered; there is no mixed outcome.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::classifier::MAX_CONFIDENCE;
use super::types::{Category, Preference};
use super::vocabulary::STRENGTH_KEYWORDS;

/// Strength analysis report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub preference: Preference,
    /// Rounded to two decimals
    pub confidence: f64,
    pub visual_keywords: Vec<String>,
    pub text_keywords: Vec<String>,
    pub total_keywords: usize,
}

impl StrengthReport {
    fn empty() -> Self {
        Self {
            preference: Preference::Absent,
            confidence: 0.0,
            visual_keywords: vec![],
            text_keywords: vec![],
            total_keywords: 0,
        }
    }
}

/// Analyze how strongly a text leans towards visual or text content
pub fn analyze_strength(text: &str) -> StrengthReport {
    let text = text.trim();
    if text.is_empty() {
        return StrengthReport::empty();
    }

    let lowered = text.to_lowercase();
    let mut visual_keywords = Vec::new();
    let mut text_keywords = Vec::new();

    for rule in STRENGTH_KEYWORDS.iter() {
        if rule.regex.is_match(&lowered) {
            match rule.category {
                Category::Visual => visual_keywords.push(rule.keyword.to_string()),
                Category::Text => text_keywords.push(rule.keyword.to_string()),
                Category::Mixed => {}
            }
        }
    }

    let visual_hits = visual_keywords.len();
    let text_hits = text_keywords.len();
    let total_keywords = visual_hits + text_hits;

    let word_count = text.split_whitespace().count();
    let density = total_keywords as f64 / word_count.max(1) as f64;

    let (preference, confidence) = if total_keywords == 0 {
        (Preference::Absent, 0.0)
    } else if visual_hits > text_hits {
        (Preference::Visual, strength_confidence(visual_hits, density))
    } else if text_hits > visual_hits {
        (Preference::Text, strength_confidence(text_hits, density))
    } else {
        (Preference::Absent, 0.0)
    };

    debug!(
        visual_hits,
        text_hits,
        density,
        %preference,
        "Preference strength analyzed"
    );

    StrengthReport {
        preference,
        confidence,
        visual_keywords,
        text_keywords,
        total_keywords,
    }
}

fn strength_confidence(hits: usize, density: f64) -> f64 {
    let raw = (0.3 + hits as f64 * 0.2 + density * 0.5).min(MAX_CONFIDENCE);
    round_half_even_2dp(raw)
}

/// Round to two decimals on the exact binary value, ties to even.
/// Float formatting already rounds this way; scaling by 100 first would not.
fn round_half_even_2dp(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
