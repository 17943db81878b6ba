//! Symbolic journal - the append-only store behind Orion's memory.

use std::collections::HashMap;

use super::{MemoryTrace, Tag, TraceId};

/// Default number of traces returned by a recall.
pub const DEFAULT_RECALL_LIMIT: usize = 5;

/// Story told when no trace matches the requested tags.
pub const EMPTY_STORY: &str = "No relevant memories yet — an invitation to learn.";

/// Human-auditable journal of Orion's experiential knowledge.
///
/// Traces are kept in insertion order and never move; a separate
/// chronological view orders them by creation time. Traces sharing a
/// timestamp keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct SymbolicMemory {
    /// All traces, indexed by insertion sequence.
    traces: Vec<MemoryTrace>,

    /// Insertion indices sorted by `created_at`.
    chronological: Vec<usize>,

    /// Index: TraceId -> insertion index.
    by_id: HashMap<TraceId, usize>,
}

impl SymbolicMemory {
    /// Create a new empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new experience, keeping the chronological order.
    ///
    /// Returns the trace ID for reference.
    pub fn store(&mut self, trace: MemoryTrace) -> TraceId {
        let id = trace.id;
        let index = self.traces.len();

        // After every trace created at or before this one
        let position = self
            .chronological
            .partition_point(|&i| self.traces[i].created_at <= trace.created_at);
        self.chronological.insert(position, index);

        self.by_id.insert(id, index);
        self.traces.push(trace);
        id
    }

    /// Retrieve the `limit` most recent traces, optionally filtered by tag.
    ///
    /// Results are in chronological order, oldest first.
    pub fn recall(&self, tag: Option<&Tag>, limit: usize) -> Vec<&MemoryTrace> {
        let mut recalled: Vec<_> = self
            .iter()
            .rev()
            .filter(|trace| tag.map_or(true, |tag| trace.has_tag(tag)))
            .take(limit)
            .collect();
        recalled.reverse();
        recalled
    }

    /// Weave a reflective narrative from every trace sharing one of `tags`.
    pub fn weave_story(&self, tags: &[Tag]) -> String {
        let matching: Vec<_> = self
            .iter()
            .filter(|trace| trace.has_any_tag(tags))
            .map(MemoryTrace::summarise)
            .collect();

        if matching.is_empty() {
            EMPTY_STORY.to_string()
        } else {
            matching.join("\n")
        }
    }

    /// Get all traces carrying a tag, in chronological order.
    pub fn traces_by_tag(&self, tag: &Tag) -> Vec<&MemoryTrace> {
        self.iter().filter(|trace| trace.has_tag(tag)).collect()
    }

    /// Get trace by ID.
    pub fn get_trace(&self, id: TraceId) -> Option<&MemoryTrace> {
        self.by_id.get(&id).map(|&index| &self.traces[index])
    }

    /// Iterate over all traces in chronological order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &MemoryTrace> + '_ {
        self.chronological.iter().map(move |&index| &self.traces[index])
    }

    /// Get the total number of traces.
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    /// Check if the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Export the journal as a JSON array in chronological order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.iter().collect::<Vec<_>>())
    }
}
