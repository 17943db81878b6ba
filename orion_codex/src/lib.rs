//! # Orion Codex
//!
//! The rule crate: human-authored principles, the codex that groups them, and
//! the ethical core that checks proposed actions against it.
//! This crate is the single source of truth for what Orion may do and does not
//! contain any orchestration logic.

pub mod codex;
pub mod ethics;
pub mod principles;

pub use codex::*;
pub use ethics::*;
pub use principles::*;
