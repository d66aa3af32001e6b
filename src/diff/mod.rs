//! Snapshot differencing.
//!
//! Compares two heap snapshots captured under the same metric and ranks
//! the symbols that grew or shrank between them.

pub mod engine;
pub mod schema;

// Re-export main types and functions
pub use engine::diff_snapshots;
pub use schema::{DeltaRecord, DiffOutcome};
