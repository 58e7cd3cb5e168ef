//! Intent classification — total, ordered, first match wins.
//!
//! Precedence is fixed at startup and deliberate: greeting keywords, then
//! the persona's own name, then the pattern rule list in declaration
//! order, then a question-mark fallback, then `Generic`. A text matching
//! several rules is classified by the first one only; later matches are
//! never consulted, so behavior is reproducible for a fixed seed.

use regex::Regex;
use tracing::debug;

/// Classification bucket determining which phrase pool a reply draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Greeting,
    Farewell,
    Identity,
    Crypto,
    MoonTiming,
    Business,
    Question,
    Generic,
}

impl Category {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Farewell => "farewell",
            Self::Identity => "identity",
            Self::Crypto => "crypto",
            Self::MoonTiming => "moon_timing",
            Self::Business => "business",
            Self::Question => "question",
            Self::Generic => "generic",
        }
    }
}

/// One ordered matcher: a compiled case-insensitive regex and the
/// category it selects.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Compiled regex for matching.
    pub regex: Regex,
    /// Category selected when this rule matches first.
    pub category: Category,
}

/// Keyword and pattern classifier for inbound text.
pub struct IntentClassifier {
    /// Substring keywords checked before any rule.
    greeting_keywords: Vec<&'static str>,
    /// The persona's name; any mention routes to `Identity`.
    persona_name: &'static str,
    /// Ordered rule list — evaluation order is significant.
    rules: Vec<PatternRule>,
}

impl IntentClassifier {
    /// Classifier for the thebertcoin persona.
    pub fn bert() -> Self {
        let rules = vec![
            PatternRule {
                regex: Regex::new(r"(?i)\b(bye|goodbye|see\s+you|later|gn|good\s*night)\b")
                    .unwrap(),
                category: Category::Farewell,
            },
            PatternRule {
                regex: Regex::new(r"(?i)\b(wen|when)\s+(moon|lambo)\b|\bmoon\b|\bpump\b").unwrap(),
                category: Category::MoonTiming,
            },
            PatternRule {
                regex: Regex::new(
                    r"(?i)\b(crypto|bitcoin|money|cash|cesh|coin|token|trade|invest)\b",
                )
                .unwrap(),
                category: Category::Crypto,
            },
            PatternRule {
                regex: Regex::new(r"(?i)\b(business|work|job|project|plan|goal)\b").unwrap(),
                category: Category::Business,
            },
        ];

        Self {
            greeting_keywords: vec!["hello", "hi", "hey", "gm", "good morning", "morning"],
            persona_name: "bert",
            rules,
        }
    }

    /// Classify input text into exactly one category.
    ///
    /// Total over any input, including the empty string, which falls
    /// through every check to `Generic`.
    pub fn classify(&self, text: &str) -> Category {
        let lower = text.to_lowercase();

        let category = if self.greeting_keywords.iter().any(|kw| lower.contains(kw)) {
            Category::Greeting
        } else if lower.contains(self.persona_name) {
            Category::Identity
        } else if let Some(rule) = self.rules.iter().find(|r| r.regex.is_match(text)) {
            rule.category
        } else if text.contains('?') {
            Category::Question
        } else {
            Category::Generic
        };

        debug!(category = category.label(), "Classified inbound text");
        category
    }
}
