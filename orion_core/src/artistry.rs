//! Artistic voice: purposeful, human-aligned creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::capabilities::Generator;

/// Modality used when none is configured.
pub const DEFAULT_MODALITY: &str = "text";

/// Ethical and aesthetic framing prepended to every generative request.
pub const CREATIVE_FRAMING: &str = "Guide the creation with empathy, truth and human connection. \
Describe the scene with sensory detail and preserve dignity.";

/// Artifact produced by the artistic voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtisticWork {
    pub modality: String,
    /// The curated prompt the work was generated from.
    pub description: String,
    pub payload: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

/// Wraps a generator behind a prompt-curation step.
pub struct ArtisticVoice {
    generator: Box<dyn Generator>,
    modality: String,
}

impl ArtisticVoice {
    pub fn new(generator: impl Generator + 'static) -> Self {
        Self {
            generator: Box::new(generator),
            modality: DEFAULT_MODALITY.to_string(),
        }
    }

    /// Set the modality used by [`ArtisticVoice::compose`].
    pub fn with_modality(mut self, modality: impl Into<String>) -> Self {
        self.modality = modality.into();
        self
    }

    pub fn modality(&self) -> &str {
        &self.modality
    }

    /// Create a work in the configured modality.
    pub fn compose(&self, intention: &str) -> ArtisticWork {
        self.compose_in(intention, &self.modality)
    }

    /// Create a work in an explicit modality.
    pub fn compose_in(&self, intention: &str, modality: &str) -> ArtisticWork {
        let prompt = curate_prompt(intention, modality);
        let payload = self.generator.generate(&prompt, modality);
        tracing::debug!(%modality, bytes = payload.len(), "composed artistic work");

        ArtisticWork {
            modality: modality.to_string(),
            description: prompt,
            payload,
            created_at: Utc::now(),
        }
    }
}

/// Add the ethical and aesthetic framing to a generative request.
pub fn curate_prompt(intention: &str, modality: &str) -> String {
    format!(
        "[{}] {}\nIntention: {}",
        modality.to_uppercase(),
        CREATIVE_FRAMING,
        intention
    )
}
