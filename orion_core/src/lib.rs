//! # Orion Nova
//!
//! The living cycle of the Orion organism. This crate consumes the codex from
//! `orion_codex`, listens to a sensory stream, deliberates, creates, acts and
//! keeps a human-auditable journal of everything it experienced.
//!
//! ## Core Components
//!
//! - **capabilities**: Traits for the external collaborators (decoder, detector, generator, publisher, synthesiser)
//! - **sensory**: Turns raw byte chunks into text with a language tag
//! - **artistry**: Curates prompts and delegates creation to a generator
//! - **action**: Publishes works with timestamped metadata
//! - **memory**: Append-only, time-ordered journal of tagged traces
//! - **cycle**: The orchestrator running listen → interpret → evaluate → act → log → reflect
//!
//! ## Design Philosophy
//!
//! - **Synchronous**: Every step is a direct call that returns or fails immediately
//! - **Injected**: Collaborators are passed in explicitly, there is no global state
//! - **Auditable**: Blocked cycles are normal outcomes and are journaled like any other

pub mod action;
pub mod artistry;
pub mod capabilities;
pub mod config;
pub mod cycle;
pub mod error;
pub mod memory;
pub mod sensory;

pub use action::*;
pub use artistry::*;
pub use capabilities::*;
pub use config::*;
pub use cycle::*;
pub use error::*;
pub use memory::*;
pub use sensory::*;

pub use orion_codex::{default_codex, Codex, EthicalCore, EthicalDecision, Principle};
