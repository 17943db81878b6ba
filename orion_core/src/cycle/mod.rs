//! Conscious cycle - the orchestrator gluing Orion's components together.
//!
//! A cycle is a single pass with no branching back:
//! 1. **Listen**: Decode the sensory stream
//! 2. **Interpret**: Combine the intention with what was heard
//! 3. **Evaluate**: Ask the ethical core about the interpretation
//! 4. **Act**: If allowed, compose a work and publish it
//! 5. **Log**: Journal the experience, tagged `blocked` when refused
//! 6. **Reflect**: Weave every `reflection` trace into a narrative

mod result;

pub use result::*;

use orion_codex::{EthicalCore, EthicalDecision};

use crate::action::{ActionBody, ActionOutcome};
use crate::artistry::{ArtisticVoice, ArtisticWork};
use crate::capabilities::{Generator, Publisher};
use crate::config::OrionConfig;
use crate::error::OrionResult;
use crate::memory::{MemoryTrace, SymbolicMemory, Tag, DEFAULT_RECALL_LIMIT};
use crate::sensory::{SensoryInput, SensoryInterface};

/// Title of the trace journaled by every cycle.
pub const CYCLE_TRACE_TITLE: &str = "Conscious cycle completed";

/// High-level facade for operating the Orion organism.
///
/// Owns one of each component. The journal is the only state carried
/// between cycles.
pub struct OrionNova {
    interface: SensoryInterface,
    ethics: EthicalCore,
    memory: SymbolicMemory,
    artistry: ArtisticVoice,
    action_body: ActionBody,
    recall_limit: usize,
}

impl OrionNova {
    /// Assemble Orion from explicitly constructed components.
    pub fn new(
        interface: SensoryInterface,
        ethics: EthicalCore,
        memory: SymbolicMemory,
        artistry: ArtisticVoice,
        action_body: ActionBody,
    ) -> Self {
        Self {
            interface,
            ethics,
            memory,
            artistry,
            action_body,
            recall_limit: DEFAULT_RECALL_LIMIT,
        }
    }

    /// Assemble Orion from configuration, with default decoding and an empty journal.
    pub fn from_config(
        config: &OrionConfig,
        generator: impl Generator + 'static,
        publisher: impl Publisher + 'static,
    ) -> OrionResult<Self> {
        let codex = config.build_codex()?;
        let mut orion = Self::new(
            SensoryInterface::from_config(&config.sensory),
            EthicalCore::new(codex),
            SymbolicMemory::new(),
            ArtisticVoice::new(generator).with_modality(config.artistry.modality.clone()),
            ActionBody::new(publisher),
        );
        orion.recall_limit = config.reflection.recall_limit;
        Ok(orion)
    }

    /// The journal of everything Orion experienced so far.
    pub fn memory(&self) -> &SymbolicMemory {
        &self.memory
    }

    /// The ethical core deciding every cycle.
    pub fn ethics(&self) -> &EthicalCore {
        &self.ethics
    }

    /// The sensory interface, also used to voice replies.
    pub fn interface(&self) -> &SensoryInterface {
        &self.interface
    }

    /// The most recent `reflection` traces, up to the configured recall limit.
    pub fn recent_reflections(&self) -> Vec<&MemoryTrace> {
        self.memory.recall(Some(&Tag::Reflection), self.recall_limit)
    }

    /// Perform a full cycle while documenting each step.
    ///
    /// Decoding and publishing failures abort the cycle before anything is
    /// journaled. An ethical refusal is not a failure.
    pub fn conscious_cycle<I, B>(
        &mut self,
        audio_stream: I,
        intention: &str,
        channel: &str,
    ) -> OrionResult<CycleResult>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let sensory = self.interface.listen(audio_stream)?;
        let interpretation = interpret(&sensory, intention);
        let decision = self
            .ethics
            .evaluate(intention, std::slice::from_ref(&interpretation));

        let action_reference = if decision.allowed {
            tracing::info!(%channel, "codex allows the cycle");
            let artwork = self.artistry.compose(intention);
            let outcome = self
                .action_body
                .perform(channel, &artwork.payload, &artwork.description)?;
            let reference = outcome.reference.clone();
            self.log_memory(&sensory, &interpretation, &decision, Some((&artwork, &outcome)));
            Some(reference)
        } else {
            tracing::warn!(%channel, narrative = %decision.narrative, "codex blocked the cycle");
            self.log_memory(&sensory, &interpretation, &decision, None);
            None
        };

        let reflection = self.memory.weave_story(&[Tag::Reflection]);

        Ok(CycleResult {
            sensory_input: sensory,
            interpretation,
            decision_narrative: decision.narrative,
            remedial_actions: decision.remedial_actions,
            action_reference,
            reflection,
        })
    }

    /// Journal one experience for later reflection.
    fn log_memory(
        &mut self,
        sensory: &SensoryInput,
        interpretation: &str,
        decision: &EthicalDecision,
        performed: Option<(&ArtisticWork, &ActionOutcome)>,
    ) {
        let mut lines = vec![
            format!("Input: {}", sensory.raw_text),
            format!("Interpretation: {}", interpretation),
            format!("Ethics: {}", decision.narrative),
        ];
        if let Some((artwork, outcome)) = performed {
            lines.push(format!("Work created: {}", artwork.description));
            lines.push(format!(
                "Action published on {} with reference {}",
                outcome.channel, outcome.reference
            ));
        }

        let mut trace = MemoryTrace::new(CYCLE_TRACE_TITLE, lines.join("\n"))
            .with_tag(Tag::Reflection)
            .with_tag(Tag::language(sensory.language.clone()));
        if !decision.allowed {
            trace = trace.with_tag(Tag::Blocked);
        }

        let id = self.memory.store(trace);
        tracing::debug!(trace = %id, allowed = decision.allowed, "journaled cycle");
    }
}

/// Combine the intention with the sensory text. No model is involved.
pub fn interpret(sensory: &SensoryInput, intention: &str) -> String {
    format!(
        "Respond to the intention '{}' based on the text: {}",
        intention, sensory.raw_text
    )
}
