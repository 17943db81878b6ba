//! Error types for the conscious cycle.

use std::path::PathBuf;

/// Result type for Orion operations.
pub type OrionResult<T> = Result<T, OrionError>;

/// A byte chunk that could not be turned into text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot decode chunk {chunk}: {reason}")]
pub struct DecodeError {
    /// Position of the offending chunk in the stream.
    pub chunk: usize,
    pub reason: String,
}

impl DecodeError {
    pub fn new(chunk: usize, reason: impl Into<String>) -> Self {
        Self {
            chunk,
            reason: reason.into(),
        }
    }
}

/// Failure reported by an external publisher.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("publishing to '{channel}' failed: {reason}")]
pub struct PublishError {
    pub channel: String,
    pub reason: String,
}

impl PublishError {
    pub fn new(channel: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            reason: reason.into(),
        }
    }
}

/// Everything that can abort a conscious cycle.
///
/// An ethical block is not an error: it is a normal branch of the cycle.
#[derive(Debug, thiserror::Error)]
pub enum OrionError {
    #[error("decoding failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("action failed: {0}")]
    Publish(#[from] PublishError),

    #[error("content source {source_name} is empty")]
    EmptyInput { source_name: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("codex error: {0}")]
    Codex(#[from] orion_codex::CodexError),
}
