//! Preference Module Tests
//!
//! Properties of the classifier over many inputs, the two vocabularies,
//! and strength analysis.

use crate::preference::{
    analyze_strength, classify, Category, Preference, PreferenceClassifier, PreferenceResult,
    SignalSource, Vocabulary, MAX_CONFIDENCE,
};

const SAMPLES: &[&str] = &[
    "",
    " ",
    "hello world",
    "I want a big pie chart",
    "Please give me a detailed, comprehensive written explanation",
    "I'd like both a chart and a detailed explanation",
    "textile manufacturing report",
    "CHARTS CHARTS CHARTS and more CHARTS",
    "I'm a visual learner, show me graphs",
    "text text text text text text text text text text",
    "a balanced approach with a mix of visuals and text please",
    "1234 !!! ???",
    "émojis 📈 and ünïcödé chart",
    "line one\nline two with a chart\nline three with detail",
];

fn classifiers() -> [PreferenceClassifier; 2] {
    [
        PreferenceClassifier::with_vocabulary(Vocabulary::Compact),
        PreferenceClassifier::with_vocabulary(Vocabulary::Extended),
    ]
}

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn test_confidence_is_bounded() {
        let long = "chart and detailed text with a mix of visuals ".repeat(200);
        for classifier in classifiers() {
            for sample in SAMPLES.iter().copied().chain([long.as_str()]) {
                let result = classifier.classify(sample);
                if let Some(confidence) = result.confidence {
                    assert!(
                        (0.0..=MAX_CONFIDENCE).contains(&confidence),
                        "Confidence {} out of range for '{}'",
                        confidence,
                        sample
                    );
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for classifier in classifiers() {
            for sample in SAMPLES {
                assert_eq!(classifier.classify(sample), classifier.classify(sample));
            }
        }
    }

    #[test]
    fn test_absent_carries_zero_or_no_confidence() {
        for classifier in classifiers() {
            for sample in SAMPLES {
                let result = classifier.classify(sample);
                if result.preference.is_absent() {
                    assert!(matches!(result.confidence, None | Some(0.0)));
                } else {
                    assert!(result.confidence.unwrap() > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_whitespace_only_is_scored_but_absent() {
        let result = classify("   ");
        assert_eq!(result.preference, Preference::Absent);
        assert_eq!(result.confidence, Some(0.0));
    }

    #[test]
    fn test_signals_sum_to_scores() {
        for classifier in classifiers() {
            for sample in SAMPLES {
                let result = classifier.classify(sample);
                let Some(scores) = result.scores else {
                    continue;
                };
                for category in [Category::Visual, Category::Text, Category::Mixed] {
                    let points: u32 = result
                        .signals
                        .iter()
                        .filter(|s| s.category == category)
                        .map(|s| s.points)
                        .sum();
                    let expected = match category {
                        Category::Visual => scores.visual,
                        Category::Text => scores.text,
                        Category::Mixed => scores.mixed,
                    };
                    assert_eq!(points, expected, "Mismatch for '{}'", sample);
                }
            }
        }
    }

    #[test]
    fn test_concurrent_callers_agree() {
        let classifier = PreferenceClassifier::new();
        let expected = classifier.classify(SAMPLES[5]);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| classifier.classify(SAMPLES[5])))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_big_chart_phrase_with_filler() {
        let result = classify("I'd really like some nice big charts please");
        assert_eq!(result.preference, Preference::Visual);
        assert!(result
            .signals
            .iter()
            .any(|s| s.source == SignalSource::Phrase && s.term.contains("big chart")));
    }

    #[test]
    fn test_mixed_confidence_floor() {
        let result = classify("I'd like both a chart and a detailed explanation");
        assert_eq!(result.preference, Preference::Mixed);
        assert!(result.confidence.unwrap() >= 0.4);
        let scores = result.scores.unwrap();
        assert!(scores.visual > 0 && scores.text > 0 && scores.mixed > 0);
    }

    #[test]
    fn test_balanced_approach_phrase() {
        // "balanced" keyword plus the balanced-approach phrase
        let result = classify("a balanced approach");
        assert_eq!(result.preference, Preference::Mixed);
        assert_eq!(result.scores.unwrap().mixed, 4);
    }

    #[test]
    fn test_unscored_result_equals_empty_input() {
        assert_eq!(classify(""), PreferenceResult::unscored());
    }
}

#[cfg(test)]
mod vocabulary_tests {
    use super::*;

    #[test]
    fn test_extended_recognises_more_visual_terms() {
        let text = "I'd like to see more infographics and a dashboard";
        let compact = PreferenceClassifier::with_vocabulary(Vocabulary::Compact)
            .score(text)
            .unwrap();
        let extended = PreferenceClassifier::with_vocabulary(Vocabulary::Extended)
            .score(text)
            .unwrap();
        assert!(extended.visual > compact.visual);

        let result = PreferenceClassifier::with_vocabulary(Vocabulary::Extended).classify(text);
        assert_eq!(result.preference, Preference::Visual);
    }

    #[test]
    fn test_extended_recognises_prose_terms() {
        let text = "I am a verbal learner who likes prose and bullet points";
        let result = PreferenceClassifier::with_vocabulary(Vocabulary::Extended).classify(text);
        assert_eq!(result.preference, Preference::Text);
        assert_eq!(result.scores.unwrap().text, 3);
    }

    #[test]
    fn test_vocabulary_accessor() {
        assert_eq!(PreferenceClassifier::new().vocabulary(), Vocabulary::Compact);
        assert_eq!(
            PreferenceClassifier::with_vocabulary(Vocabulary::Extended).vocabulary(),
            Vocabulary::Extended
        );
    }
}

#[cfg(test)]
mod strength_tests {
    use super::*;

    #[test]
    fn test_strength_reports_found_keywords() {
        let report = analyze_strength("  I need a timeline and a map, not a report  ");
        assert_eq!(report.preference, Preference::Visual);
        assert_eq!(report.visual_keywords, vec!["map".to_string(), "timeline".to_string()]);
        assert_eq!(report.text_keywords, vec!["report".to_string()]);
        assert_eq!(report.total_keywords, 3);
        assert!(report.confidence > 0.0 && report.confidence <= MAX_CONFIDENCE);
    }

    #[test]
    fn test_strength_ignores_mixed_keywords() {
        let report = analyze_strength("both together and combined");
        assert_eq!(report.preference, Preference::Absent);
        assert_eq!(report.total_keywords, 0);
    }
}
