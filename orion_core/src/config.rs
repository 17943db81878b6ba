//! Orion configuration
//!
//! All tunable parameters in one place. Loaded from TOML at startup,
//! falls back to defaults if no config file exists.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::OrionResult;
use orion_codex::{default_codex, Codex};

/// Top-level Orion configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrionConfig {
    /// Sensory interface parameters.
    pub sensory: SensoryConfig,
    /// Artistic voice parameters.
    pub artistry: ArtistryConfig,
    /// Reflection (memory query) parameters.
    pub reflection: ReflectionConfig,
    /// Where the codex comes from.
    pub codex: CodexConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensoryConfig {
    /// Language tag used when no detector is injected.
    pub default_language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistryConfig {
    /// Modality requested from the generator during a cycle.
    pub modality: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflectionConfig {
    /// Max traces returned by `OrionNova::recent_reflections`.
    pub recall_limit: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodexConfig {
    /// TOML codex definition. The built-in codex is used when unset.
    pub path: Option<PathBuf>,
}

// ============================================================
// Defaults
// ============================================================

impl Default for SensoryConfig {
    fn default() -> Self {
        Self {
            default_language: crate::sensory::UNDETERMINED_LANGUAGE.into(),
        }
    }
}

impl Default for ArtistryConfig {
    fn default() -> Self {
        Self {
            modality: crate::artistry::DEFAULT_MODALITY.into(),
        }
    }
}

impl Default for ReflectionConfig {
    fn default() -> Self {
        Self {
            recall_limit: crate::memory::DEFAULT_RECALL_LIMIT,
        }
    }
}

// ============================================================
// Loading
// ============================================================

impl OrionConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {} (using defaults)", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Parse config from TOML. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> OrionResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write the current config as TOML (for generating a default config file).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Build the codex this config points at.
    pub fn build_codex(&self) -> OrionResult<Codex> {
        match &self.codex.path {
            Some(path) => Ok(Codex::load(path)?),
            None => Ok(default_codex()),
        }
    }
}
