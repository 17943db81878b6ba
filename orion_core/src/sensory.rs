//! Sensory interface: raw byte chunks in, text with a language tag out.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::capabilities::{LanguageDetector, Synthesiser, TextDecoder, Utf8Decoder};
use crate::config::SensoryConfig;
use crate::error::{OrionError, OrionResult};

/// BCP 47 tag for an undetermined language.
pub const UNDETERMINED_LANGUAGE: &str = "und";

/// What Orion heard during one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensoryInput {
    pub raw_text: String,
    pub language: String,
}

/// What Orion says back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenMessage {
    pub text: String,
    pub audio: Vec<u8>,
}

/// Stateless bridge between raw input bytes and text.
pub struct SensoryInterface {
    decoder: Box<dyn TextDecoder>,
    detector: Option<Box<dyn LanguageDetector>>,
    synthesiser: Option<Box<dyn Synthesiser>>,
    default_language: String,
}

impl SensoryInterface {
    /// Strict UTF-8 decoding, no detector, undetermined language.
    pub fn new() -> Self {
        Self {
            decoder: Box::new(Utf8Decoder),
            detector: None,
            synthesiser: None,
            default_language: UNDETERMINED_LANGUAGE.to_string(),
        }
    }

    pub fn from_config(config: &SensoryConfig) -> Self {
        Self::new().with_default_language(config.default_language.clone())
    }

    pub fn with_decoder(mut self, decoder: impl TextDecoder + 'static) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    pub fn with_detector(mut self, detector: impl LanguageDetector + 'static) -> Self {
        self.detector = Some(Box::new(detector));
        self
    }

    pub fn with_synthesiser(mut self, synthesiser: impl Synthesiser + 'static) -> Self {
        self.synthesiser = Some(Box::new(synthesiser));
        self
    }

    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    /// Decode every chunk and concatenate the text.
    ///
    /// The first chunk that fails to decode aborts with [`OrionError::Decode`].
    pub fn listen<I, B>(&self, byte_chunks: I) -> OrionResult<SensoryInput>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let mut raw_text = String::new();
        for (index, chunk) in byte_chunks.into_iter().enumerate() {
            raw_text.push_str(&self.decoder.decode(index, chunk.as_ref())?);
        }

        let language = match &self.detector {
            Some(detector) => detector.detect(&raw_text),
            None => self.default_language.clone(),
        };

        tracing::debug!(
            bytes = raw_text.len(),
            chars = raw_text.chars().count(),
            %language,
            "listened to sensory stream"
        );
        Ok(SensoryInput { raw_text, language })
    }

    /// Voice a text through the synthesiser, or as plain UTF-8 bytes without one.
    pub fn speak(&self, text: &str) -> SpokenMessage {
        let audio = match &self.synthesiser {
            Some(synthesiser) => synthesiser.speak(text),
            None => text.as_bytes().to_vec(),
        };
        SpokenMessage {
            text: text.to_string(),
            audio,
        }
    }
}

impl Default for SensoryInterface {
    fn default() -> Self {
        Self::new()
    }
}

/// Read an external UTF-8 content source as a single-chunk stream.
///
/// Content is trimmed; a source with nothing left is rejected before it can
/// enter a cycle.
pub fn read_text_source(path: &Path) -> OrionResult<Vec<Vec<u8>>> {
    let content = std::fs::read_to_string(path).map_err(|source| OrionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = content.trim();
    if text.is_empty() {
        return Err(OrionError::EmptyInput {
            source_name: path.display().to_string(),
        });
    }
    Ok(vec![text.as_bytes().to_vec()])
}
