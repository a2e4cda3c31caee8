//! Keyword and phrase tables for preference detection.
//!
//! Two tables share one decision policy:
//! - `Compact`: the small table used for immediate feedback while the user types.
//! - `Extended`: the broader table used when classifying a saved introduction.
//!
//! Tables are compiled once per process and never mutated.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::types::Category;

/// Phrase weight for visual and text phrase patterns
pub const DIRECTIONAL_PHRASE_WEIGHT: u32 = 2;
/// Phrase weight for mixed phrase patterns
pub const MIXED_PHRASE_WEIGHT: u32 = 3;

/// Which rule table a classifier runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vocabulary {
    #[default]
    Compact,
    Extended,
}

impl Vocabulary {
    pub fn label(&self) -> &'static str {
        match self {
            Vocabulary::Compact => "compact",
            Vocabulary::Extended => "extended",
        }
    }

    pub(crate) fn table(&self) -> &'static RuleTable {
        match self {
            Vocabulary::Compact => &*COMPACT_TABLE,
            Vocabulary::Extended => &*EXTENDED_TABLE,
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Vocabulary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(Vocabulary::Compact),
            "extended" => Ok(Vocabulary::Extended),
            other => Err(format!("unknown vocabulary '{}'", other)),
        }
    }
}

/// A literal keyword anchored on word boundaries
pub(crate) struct KeywordRule {
    pub category: Category,
    pub keyword: &'static str,
    pub regex: Regex,
}

/// A proximity-bounded phrase pattern with a fixed weight
pub(crate) struct PhraseRule {
    pub category: Category,
    pub regex: Regex,
    pub weight: u32,
}

pub(crate) struct RuleTable {
    pub keywords: Vec<KeywordRule>,
    pub phrases: Vec<PhraseRule>,
}

// --- Compact table ---

const COMPACT_VISUAL_KEYWORDS: &[&str] = &[
    "chart",
    "charts",
    "graph",
    "graphs",
    "visual",
    "visuals",
    "diagram",
    "diagrams",
    "plot",
    "plots",
    "visualization",
    "graphic",
    "graphics",
    "dashboard",
    "map",
    "timeline",
    "pie chart",
    "bar chart",
    "line chart",
    "big charts",
    "large graphs",
    "prominent visuals",
];

const COMPACT_TEXT_KEYWORDS: &[&str] = &[
    "text",
    "explanation",
    "explanations",
    "detail",
    "details",
    "detailed",
    "description",
    "analysis",
    "report",
    "summary",
    "elaborate",
    "comprehensive",
    "thorough",
    "in-depth",
    "written",
];

const MIXED_KEYWORDS: &[&str] = &[
    "both",
    "balanced",
    "combination",
    "mix",
    "mixed",
    "balance",
    "together",
    "and",
    "plus",
    "along with",
    "as well as",
    "combined",
    "integrate",
    "blend",
];

const COMPACT_VISUAL_PHRASES: &[&str] = &[
    r"\b(prefer|like|want|need|show me|give me).{0,20}(big|large|prominent).{0,10}(chart|graph|visual)",
    r"\b(big|large|prominent).{0,10}(chart|graph|visual)",
    r"\b(prefer|like|want|need|show me|give me).{0,20}(chart|graph|visual)",
    r"\bvisual\w*\s+(person|learner|type)",
    r"\bvisualize\b",
];

const COMPACT_TEXT_PHRASES: &[&str] = &[
    r"\b(prefer|like|want|need|give me|show me).{0,20}(detailed|comprehensive|thorough).{0,10}(text|explanation|detail)",
    r"\b(detailed|comprehensive|thorough).{0,10}(text|explanation|detail)",
    r"\b(prefer|like|want|need|give me|show me).{0,20}(text|explanation|detail)",
    r"\btext\w*\s+(person|learner|type)",
    r"\bexplain.{0,10}(detail|thorough)",
];

const COMPACT_MIXED_PHRASES: &[&str] = &[
    r"\b(both|combination|mix|balance).{0,20}(chart|graph|visual).{0,20}(text|explanation|detail)",
    r"\b(both|combination|mix|balance).{0,20}(text|explanation|detail).{0,20}(chart|graph|visual)",
    r"\b(chart|graph|visual).{0,20}(and|plus|with).{0,20}(text|explanation|detail)",
    r"\b(text|explanation|detail).{0,20}(and|plus|with).{0,20}(chart|graph|visual)",
    r"\bbalanced.{0,20}(approach|content|response)",
    r"\bmix.{0,20}of.{0,20}(visual|text)",
];

// --- Extended table ---

const EXTENDED_VISUAL_KEYWORDS: &[&str] = &[
    "chart",
    "charts",
    "graph",
    "graphs",
    "visual",
    "visuals",
    "diagram",
    "diagrams",
    "plot",
    "plots",
    "visualization",
    "visualizations",
    "graphic",
    "graphics",
    "image",
    "images",
    "figure",
    "figures",
    "infographic",
    "infographics",
    "dashboard",
    "dashboards",
    "map",
    "maps",
    "timeline",
    "timelines",
    "flowchart",
    "flowcharts",
    "pie chart",
    "bar chart",
    "line chart",
    "scatter plot",
    "heatmap",
    "treemap",
    "candlestick",
    "histogram",
    "big charts",
    "large graphs",
    "prominent visuals",
];

const EXTENDED_TEXT_KEYWORDS: &[&str] = &[
    "text",
    "explanation",
    "explanations",
    "detail",
    "details",
    "detailed",
    "description",
    "descriptions",
    "narrative",
    "narratives",
    "summary",
    "summaries",
    "analysis",
    "analyses",
    "report",
    "reports",
    "breakdown",
    "breakdowns",
    "insight",
    "insights",
    "commentary",
    "commentaries",
    "discussion",
    "discussions",
    "elaborate",
    "elaboration",
    "comprehensive",
    "thorough",
    "in-depth",
    "written",
    "textual",
    "verbal",
    "prose",
    "paragraph",
    "paragraphs",
    "bullet point",
    "bullet points",
    "list",
    "lists",
];

const EXTENDED_VISUAL_PHRASES: &[&str] = &[
    r"\b(prefer|like|want|need|show me|give me|display).{0,20}(big|large|prominent).{0,10}(chart|graph|visual)",
    r"\b(big|large|prominent).{0,10}(chart|graph|visual)",
    r"\b(prefer|like|want|need|show me|give me|display).{0,20}(chart|graph|visual)",
    r"\b(chart|graph|visual).{0,20}(prefer|like|want|need|better)",
    r"\bvisual\w*\s+(person|learner|type)",
    r"\bsee.{0,10}(chart|graph|visual)",
    r"\bshow.{0,10}(chart|graph|visual)",
    r"\b(more|less).{0,10}(chart|graph|visual)",
    r"\bvisualize\b",
    r"\bdashboard\b",
];

const EXTENDED_TEXT_PHRASES: &[&str] = &[
    r"\b(prefer|like|want|need|give me|show me).{0,20}(detailed|comprehensive|thorough).{0,10}(text|explanation|detail)",
    r"\b(detailed|comprehensive|thorough).{0,10}(text|explanation|detail)",
    r"\b(prefer|like|want|need|give me|show me).{0,20}(text|explanation|detail)",
    r"\b(text|explanation|detail).{0,20}(prefer|like|want|need|better)",
    r"\btext\w*\s+(person|learner|type)",
    r"\bread.{0,10}(text|explanation|detail)",
    r"\bexplain.{0,10}(detail|thorough)",
    r"\b(more|less).{0,20}(text|explanation|detail)",
    r"\bbut.{0,10}(prefer|like).{0,10}(text|explanation|detail)",
];

const EXTENDED_MIXED_PHRASES: &[&str] = &[
    r"\b(both|combination|mix|balance).{0,20}(chart|graph|visual).{0,20}(text|explanation|detail)",
    r"\b(both|combination|mix|balance).{0,20}(text|explanation|detail).{0,20}(chart|graph|visual)",
    r"\b(chart|graph|visual).{0,20}(and|plus|with).{0,20}(text|explanation|detail)",
    r"\b(text|explanation|detail).{0,20}(and|plus|with).{0,20}(chart|graph|visual)",
    r"\bbalanced.{0,20}(approach|content|response)",
    r"\bmix.{0,20}of.{0,20}(visual|text)",
    r"\bcombine.{0,20}(visual|text)",
    r"\bintegrate.{0,20}(chart|graph|visual).{0,20}(text|explanation)",
];

// --- Strength analysis keywords (presence-based, no mixed category) ---

const STRENGTH_VISUAL_KEYWORDS: &[&str] = &[
    "chart",
    "charts",
    "graph",
    "graphs",
    "visual",
    "visuals",
    "diagram",
    "diagrams",
    "plot",
    "plots",
    "visualization",
    "graphic",
    "graphics",
    "dashboard",
    "map",
    "timeline",
];

const STRENGTH_TEXT_KEYWORDS: &[&str] = &[
    "text",
    "explanation",
    "explanations",
    "detail",
    "details",
    "detailed",
    "description",
    "analysis",
    "report",
    "summary",
    "elaborate",
    "comprehensive",
    "thorough",
    "in-depth",
];

/// Build a boundary-anchored regex for a literal keyword.
///
/// The keyword is escaped so literals like `in-depth` match verbatim.
pub(crate) fn keyword_regex(keyword: &str) -> Regex {
    // NOTE: expect() is acceptable here: the pattern is an escaped literal and cannot fail to compile
    Regex::new(&format!(r"\b{}\b", regex::escape(keyword)))
        .expect("Invalid regex: escaped keyword")
}

fn keyword_rules(category: Category, keywords: &[&'static str]) -> Vec<KeywordRule> {
    keywords
        .iter()
        .map(|&keyword| KeywordRule {
            category,
            keyword,
            regex: keyword_regex(keyword),
        })
        .collect()
}

fn phrase_rules(category: Category, patterns: &[&str], weight: u32) -> Vec<PhraseRule> {
    patterns
        .iter()
        .map(|pattern| PhraseRule {
            category,
            regex: Regex::new(pattern).expect("Invalid regex: phrase pattern"),
            weight,
        })
        .collect()
}

fn build_table(
    visual_keywords: &[&'static str],
    text_keywords: &[&'static str],
    visual_phrases: &[&str],
    text_phrases: &[&str],
    mixed_phrases: &[&str],
) -> RuleTable {
    let mut keywords = keyword_rules(Category::Visual, visual_keywords);
    keywords.extend(keyword_rules(Category::Text, text_keywords));
    keywords.extend(keyword_rules(Category::Mixed, MIXED_KEYWORDS));

    let mut phrases = phrase_rules(Category::Visual, visual_phrases, DIRECTIONAL_PHRASE_WEIGHT);
    phrases.extend(phrase_rules(Category::Text, text_phrases, DIRECTIONAL_PHRASE_WEIGHT));
    phrases.extend(phrase_rules(Category::Mixed, mixed_phrases, MIXED_PHRASE_WEIGHT));

    RuleTable { keywords, phrases }
}

// Compile tables once at first use
static COMPACT_TABLE: LazyLock<RuleTable> = LazyLock::new(|| {
    build_table(
        COMPACT_VISUAL_KEYWORDS,
        COMPACT_TEXT_KEYWORDS,
        COMPACT_VISUAL_PHRASES,
        COMPACT_TEXT_PHRASES,
        COMPACT_MIXED_PHRASES,
    )
});

static EXTENDED_TABLE: LazyLock<RuleTable> = LazyLock::new(|| {
    build_table(
        EXTENDED_VISUAL_KEYWORDS,
        EXTENDED_TEXT_KEYWORDS,
        EXTENDED_VISUAL_PHRASES,
        EXTENDED_TEXT_PHRASES,
        EXTENDED_MIXED_PHRASES,
    )
});

pub(crate) static STRENGTH_KEYWORDS: LazyLock<Vec<KeywordRule>> = LazyLock::new(|| {
    let mut rules = keyword_rules(Category::Visual, STRENGTH_VISUAL_KEYWORDS);
    rules.extend(keyword_rules(Category::Text, STRENGTH_TEXT_KEYWORDS));
    rules
});
