//! Tag definitions - labels attached to memory traces.

use serde::{Deserialize, Serialize};

/// Tags label traces so they can be recalled and woven into stories.
///
/// Tags travel as plain strings (`reflection`, `lang:en`, `channel:demo`,
/// anything else is custom), so parsing and rendering round-trip.
///
/// Equality, hashing and ordering go through the string form, so a
/// `Custom("reflection")` built by hand is the same tag as `Reflection`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    /// Every conscious cycle is logged with this tag.
    Reflection,

    /// The cycle was stopped by the ethical core.
    Blocked,

    /// A work was published.
    Publication,

    /// Language the input was heard in.
    Language(String),

    /// Channel a work was published on.
    Channel(String),

    /// Custom tag for extension.
    Custom(String),
}

impl Tag {
    /// Create a language tag.
    pub fn language(code: impl Into<String>) -> Self {
        Tag::Language(code.into())
    }

    /// Create a channel tag.
    pub fn channel(name: impl Into<String>) -> Self {
        Tag::Channel(name.into())
    }

    /// Create a free-form tag. Well-known names map to their own variants.
    pub fn custom(name: impl Into<String>) -> Self {
        Tag::parse(&name.into())
    }

    /// Parse a tag from its string form.
    pub fn parse(value: &str) -> Self {
        match value {
            "reflection" => Tag::Reflection,
            "blocked" => Tag::Blocked,
            "publication" => Tag::Publication,
            _ => {
                if let Some(code) = value.strip_prefix("lang:") {
                    Tag::Language(code.to_string())
                } else if let Some(name) = value.strip_prefix("channel:") {
                    Tag::Channel(name.to_string())
                } else {
                    Tag::Custom(value.to_string())
                }
            }
        }
    }

    /// Convert the tag to its string representation.
    pub fn as_string(&self) -> String {
        match self {
            Tag::Reflection => "reflection".to_string(),
            Tag::Blocked => "blocked".to_string(),
            Tag::Publication => "publication".to_string(),
            Tag::Language(code) => format!("lang:{}", code),
            Tag::Channel(name) => format!("channel:{}", name),
            Tag::Custom(s) => s.clone(),
        }
    }

    /// Get the category of this tag.
    pub fn category(&self) -> &'static str {
        match self {
            Tag::Reflection | Tag::Blocked | Tag::Publication => "cycle",
            Tag::Language(_) => "language",
            Tag::Channel(_) => "channel",
            Tag::Custom(_) => "custom",
        }
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::parse(value)
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Tag::parse(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.as_string()
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.as_string() == other.as_string()
    }
}

impl Eq for Tag {}

impl std::hash::Hash for Tag {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_string().hash(state);
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_string().cmp(&other.as_string())
    }
}
