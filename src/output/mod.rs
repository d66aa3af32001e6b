//! Output rendering for triage reports.
//!
//! Each mode has one report schema (`output::json`) rendered either as
//! pretty JSON for machine consumption or as a ranked text report
//! (`output::text`) for humans.

pub mod json;
pub mod text;

// Re-export main types and functions
pub use json::{
    print_json, DeltaEntry, DiffReport, FunctionEntry, GoroutineReport, HeapSummaryReport,
    PackageEntry, SignatureEntry, StateEntry,
};
pub use text::{diff_text, fmt_mib, goroutine_text, heap_summary_text};
