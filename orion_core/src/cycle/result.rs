//! The record returned by one conscious cycle.

use serde::{Deserialize, Serialize};

use crate::sensory::SensoryInput;

/// Outcome of a full listen → interpret → act → reflect loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleResult {
    pub sensory_input: SensoryInput,
    pub interpretation: String,
    pub decision_narrative: String,
    pub remedial_actions: Vec<String>,
    /// Present only when the codex allowed the action and it was published.
    pub action_reference: Option<String>,
    pub reflection: String,
}

impl CycleResult {
    /// Whether the cycle ended with a publication.
    pub fn acted(&self) -> bool {
        self.action_reference.is_some()
    }

    /// Serialize the result for display layers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
