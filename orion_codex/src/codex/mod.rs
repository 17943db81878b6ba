//! The codex: an ordered, auditable list of principles.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::principles::{default_principles, Principle};

/// Narrative returned when no action questions any principle.
pub const HARMONY_NARRATIVE: &str = "All actions harmonise with the codex.";

/// Errors raised while building or loading a codex.
#[derive(Debug, thiserror::Error)]
pub enum CodexError {
    #[error("duplicate principle name: {0}")]
    DuplicatePrinciple(String),

    #[error("invalid codex definition: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read codex from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of checking a batch of actions against the codex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// True when no action questions any principle.
    pub aligned: bool,

    /// Either the misalignment lines joined by newlines or [`HARMONY_NARRATIVE`].
    pub narrative: String,
}

/// Collective articulation of the Orion Codex.
///
/// Kept small and legible so that humans can audit and amend it. Principle
/// order is preserved and determines the order of misalignment lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Codex {
    principles: Vec<Principle>,
}

/// On-disk shape of a codex definition.
#[derive(Debug, Deserialize)]
struct CodexFile {
    #[serde(default)]
    principles: Vec<Principle>,
}

impl Codex {
    /// Build a codex, rejecting duplicate principle names.
    ///
    /// Keywords are lower-cased here as well, so principles read from TOML or
    /// assembled field by field match case-insensitively.
    pub fn new(mut principles: Vec<Principle>) -> Result<Self, CodexError> {
        let mut seen = HashSet::new();
        for principle in &principles {
            if !seen.insert(principle.name.as_str()) {
                return Err(CodexError::DuplicatePrinciple(principle.name.clone()));
            }
        }
        principles.iter_mut().for_each(Principle::normalize_keywords);
        Ok(Self { principles })
    }

    /// Parse a codex from TOML with a `[[principles]]` array.
    pub fn from_toml_str(content: &str) -> Result<Self, CodexError> {
        let file: CodexFile = toml::from_str(content)?;
        Self::new(file.principles)
    }

    /// Load a codex definition from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CodexError> {
        let content = std::fs::read_to_string(path).map_err(|source| CodexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let codex = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded codex with {} principles from {}",
            codex.len(),
            path.display()
        );
        Ok(codex)
    }

    /// Principles in codex order.
    pub fn principles(&self) -> &[Principle] {
        &self.principles
    }

    /// Get a principle by name.
    pub fn principle(&self, name: &str) -> Option<&Principle> {
        self.principles.iter().find(|p| p.name == name)
    }

    /// Number of principles.
    pub fn len(&self) -> usize {
        self.principles.len()
    }

    /// Whether the codex has no principles (every check then passes).
    pub fn is_empty(&self) -> bool {
        self.principles.is_empty()
    }

    /// Compose the manifesto, one principle per line.
    pub fn manifest(&self) -> String {
        self.principles
            .iter()
            .map(Principle::as_manifesto)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check whether the proposed actions resonate with every principle.
    ///
    /// Each action is lower-cased and searched for every principle's forbidden
    /// keywords as plain substrings. One misalignment line is recorded per
    /// (action, principle) pair that matches.
    pub fn ensure_consistency<I, S>(&self, proposed_actions: I) -> Alignment
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut misalignments = Vec::new();

        for action in proposed_actions {
            let action = action.as_ref();
            let lowered = action.to_lowercase();
            for principle in &self.principles {
                if principle.first_violation(&lowered).is_some() {
                    misalignments.push(format!(
                        "Action '{}' questions {}: {}",
                        action, principle.name, principle.statement
                    ));
                }
            }
        }

        if misalignments.is_empty() {
            Alignment {
                aligned: true,
                narrative: HARMONY_NARRATIVE.to_string(),
            }
        } else {
            Alignment {
                aligned: false,
                narrative: misalignments.join("\n"),
            }
        }
    }
}

impl Default for Codex {
    fn default() -> Self {
        default_codex()
    }
}

/// Create the default human-authored codex.
pub fn default_codex() -> Codex {
    Codex {
        principles: default_principles(),
    }
}
