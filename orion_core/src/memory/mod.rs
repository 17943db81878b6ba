//! Symbolic memory - Orion's human-auditable journal.
//!
//! The journal consists of:
//! - **Tags**: Free-form labels, with a few well-known ones the cycle relies on
//! - **Traces**: Narrative records of an experience, each carrying tags
//! - **SymbolicMemory**: The append-only store keeping traces in chronological order

mod journal;
mod tag;
mod trace;

pub use journal::*;
pub use tag::*;
pub use trace::*;
