//! Ethical deliberation: the core that interrogates intent before action.

use serde::{Deserialize, Serialize};

use crate::codex::Codex;

/// Suggested when the codex flags a misalignment.
pub const REWRITE_WITH_HUMAN: &str =
    "Rewrite the intention together with the human, seeking shared clarity.";
/// Suggested when the codex flags a misalignment.
pub const ADD_SAFEGUARDS: &str = "Add explicit safeguards of care to the execution.";
/// Suggested whenever the intention is phrased as a question.
pub const ASK_CLARIFYING_QUESTIONS: &str =
    "Ask further questions to understand the human nuances.";

/// Result of an ethical evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthicalDecision {
    pub allowed: bool,

    /// Never empty: either the harmony sentence or the misalignment lines.
    pub narrative: String,

    pub remedial_actions: Vec<String>,
}

/// Heart of Orion: checks proposed actions against the codex.
#[derive(Debug, Clone, Default)]
pub struct EthicalCore {
    codex: Codex,
}

impl EthicalCore {
    /// Create an ethical core bound to a codex.
    pub fn new(codex: Codex) -> Self {
        Self { codex }
    }

    /// The codex this core enforces.
    pub fn codex(&self) -> &Codex {
        &self.codex
    }

    /// Assess whether a set of actions respects the codex.
    pub fn evaluate<S: AsRef<str>>(&self, intention: &str, proposed_actions: &[S]) -> EthicalDecision {
        let alignment = self
            .codex
            .ensure_consistency(proposed_actions.iter().map(AsRef::as_ref));

        let mut remedial_actions = Vec::new();
        if !alignment.aligned {
            remedial_actions.push(REWRITE_WITH_HUMAN.to_string());
            remedial_actions.push(ADD_SAFEGUARDS.to_string());
        }
        if intention.contains('?') {
            remedial_actions.push(ASK_CLARIFYING_QUESTIONS.to_string());
        }

        EthicalDecision {
            allowed: alignment.aligned,
            narrative: alignment.narrative,
            remedial_actions,
        }
    }
}
