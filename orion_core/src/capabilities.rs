//! Capability traits for the external collaborators Orion depends on.
//!
//! Each trait has a single method. Implementations are supplied by the
//! embedding application; the few provided here are the plain defaults.

use std::collections::BTreeMap;

use crate::error::{DecodeError, PublishError};

/// Turns one raw byte chunk into text.
pub trait TextDecoder: Send + Sync {
    /// `index` is the chunk position in the stream, used for error reporting.
    fn decode(&self, index: usize, chunk: &[u8]) -> Result<String, DecodeError>;
}

/// Names the language of a decoded text.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> String;
}

/// Creative model producing a payload (text, image, sound) from a prompt.
pub trait Generator: Send + Sync {
    fn generate(&self, prompt: &str, modality: &str) -> Vec<u8>;
}

/// Sink that publishes a payload and returns an opaque reference.
pub trait Publisher: Send + Sync {
    fn publish(
        &self,
        channel: &str,
        payload: &[u8],
        metadata: &BTreeMap<String, String>,
    ) -> Result<String, PublishError>;
}

/// Turns text back into audio bytes.
pub trait Synthesiser: Send + Sync {
    fn speak(&self, text: &str) -> Vec<u8>;
}

/// Strict UTF-8 decoder. Invalid sequences are errors, never replaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Decoder;

impl TextDecoder for Utf8Decoder {
    fn decode(&self, index: usize, chunk: &[u8]) -> Result<String, DecodeError> {
        std::str::from_utf8(chunk)
            .map(str::to_owned)
            .map_err(|e| DecodeError::new(index, e.to_string()))
    }
}
