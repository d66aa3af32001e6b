//! Parsing of `go tool pprof -top` report text.
//!
//! The renderer gives us a semi-structured table: one row per symbol with a
//! human-readable size literal, plus an optional "Total:" summary line. This
//! module turns that text into normalized numeric records.

pub mod report;
pub mod schema;
pub mod size;

// Re-export main types and functions
pub use report::parse_report;
pub use schema::{HeapReport, ReportRow, Snapshot, Totals};
pub use size::{find_size_literals, parse_size};
