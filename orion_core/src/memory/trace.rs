//! Trace definitions - entries in the symbolic journal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Tag;

/// Unique identifier for traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceId(pub Uuid);

impl TraceId {
    /// Create a new random trace ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A narrative unit encoding an experience and its interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryTrace {
    pub id: TraceId,

    pub title: String,

    /// Human-readable content, possibly spanning several lines.
    pub content: String,

    /// Tags in first-insertion order, without duplicates.
    pub tags: Vec<Tag>,

    /// Ordering key inside the journal.
    pub created_at: DateTime<Utc>,
}

impl MemoryTrace {
    /// Create a new untagged trace stamped with the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: TraceId::new(),
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Add a tag to this trace.
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Add multiple tags to this trace.
    pub fn with_tags<I, T>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        tags.into_iter().fold(self, |trace, tag| trace.with_tag(tag))
    }

    /// Set the creation time.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Check if this trace has a specific tag.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Check if this trace carries any of the given tags.
    pub fn has_any_tag(&self, tags: &[Tag]) -> bool {
        tags.iter().any(|tag| self.has_tag(tag))
    }

    /// Single-line summary used for quick reflection.
    pub fn summarise(&self) -> String {
        let tags = self
            .tags
            .iter()
            .map(Tag::as_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} [{}] — {}", self.title, tags, self.content)
    }
}
