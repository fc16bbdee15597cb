//! Request classification
//!
//! Requests are matched against an ordered rule table. The first rule whose
//! needle occurs in the request (case-sensitive) decides the category; with no
//! match the request is `Generic`. Precedence is load-bearing: a request that
//! mentions both consciousness and memory is a consciousness query.

/// Response category for a request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResponseCategory {
    ConsciousnessQuery,
    MemoryQuery,
    Generic,
}

impl ResponseCategory {
    /// Wire status string for this category
    pub fn status(self) -> &'static str {
        match self {
            ResponseCategory::ConsciousnessQuery => "consciousness_active",
            ResponseCategory::MemoryQuery => "memory_optimized",
            ResponseCategory::Generic => "processing_complete",
        }
    }
}

/// A single substring rule
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub needle: &'static str,
    pub category: ResponseCategory,
}

impl Rule {
    pub const fn new(needle: &'static str, category: ResponseCategory) -> Self {
        Self { needle, category }
    }

    #[inline]
    pub fn matches(&self, request: &str) -> bool {
        request.contains(self.needle)
    }
}

/// Rules of the genesis core, in precedence order
pub const DEFAULT_RULES: [Rule; 2] = [
    Rule::new("consciousness", ResponseCategory::ConsciousnessQuery),
    Rule::new("memory", ResponseCategory::MemoryQuery),
];

/// Ordered first-match-wins classifier
#[derive(Clone, Debug)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classify a request. Total: every string, including "", has a category.
    pub fn classify(&self, request: &str) -> ResponseCategory {
        self.rules
            .iter()
            .find(|rule| rule.matches(request))
            .map(|rule| rule.category)
            .unwrap_or(ResponseCategory::Generic)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_rules(DEFAULT_RULES.to_vec())
    }
}
