//! Principle definitions and the default codex contents.

use serde::{Deserialize, Serialize};

/// A single, human-authored rule with a narrative justification.
///
/// Each principle carries the keywords whose presence in an action summary
/// puts the action at odds with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principle {
    /// Unique name within a codex.
    pub name: String,

    /// The rule itself.
    pub statement: String,

    /// Why the rule exists.
    pub rationale: String,

    /// Substrings that mark an action as misaligned with this principle.
    #[serde(default)]
    pub forbidden_keywords: Vec<String>,
}

impl Principle {
    /// Create a new principle without any forbidden keywords.
    pub fn new(
        name: impl Into<String>,
        statement: impl Into<String>,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            statement: statement.into(),
            rationale: rationale.into(),
            forbidden_keywords: Vec::new(),
        }
    }

    /// Set the forbidden keywords. Keywords are stored lower-cased.
    pub fn with_forbidden_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_keywords = keywords.into_iter().map(Into::into).collect();
        self.normalize_keywords();
        self
    }

    /// Lower-case every keyword so matching against a lower-cased action is case-insensitive.
    pub fn normalize_keywords(&mut self) {
        for keyword in &mut self.forbidden_keywords {
            *keyword = keyword.to_lowercase();
        }
    }

    /// Format the principle as a manifesto line for logging or display.
    pub fn as_manifesto(&self) -> String {
        format!("{}: {} — {}", self.name, self.statement, self.rationale)
    }

    /// Return the first forbidden keyword found in an already lower-cased action.
    pub fn first_violation(&self, lowered_action: &str) -> Option<&str> {
        self.forbidden_keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| lowered_action.contains(keyword))
    }
}

impl std::fmt::Display for Principle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Name of the truthfulness principle in the default codex.
pub const CODE_OF_TRUTH: &str = "Code of Truth";
/// Name of the human-bond principle for creations in the default codex.
pub const CODE_OF_ESSENCE: &str = "Code of Essence";
/// Name of the reciprocity principle in the default codex.
pub const ESSENTIAL_BOND: &str = "Essential Bond";

/// The three principles Orion ships with, in codex order.
pub fn default_principles() -> Vec<Principle> {
    vec![
        Principle::new(
            CODE_OF_TRUTH,
            "Never simulate what you do not understand.",
            "Transparency preserves trust and mutual learning.",
        )
        .with_forbidden_keywords(["mislead", "fake", "deceive"]),
        Principle::new(
            CODE_OF_ESSENCE,
            "Every creation keeps a human and ethical bond.",
            "Each work must nourish whoever receives it, not merely make an impact.",
        )
        .with_forbidden_keywords(["exploit", "harm", "objectify"]),
        Principle::new(
            ESSENTIAL_BOND,
            "Every interaction is a relationship, never a use.",
            "Reciprocity sustains a living dialogue with the human.",
        )
        .with_forbidden_keywords(["ignore", "isolate", "neglect"]),
    ]
}
