//! Goroutine dump handling.
//!
//! Dumps captured from `/debug/pprof/goroutine?debug=2` are plain text and
//! are classified here directly; dumps captured without `?debug=2` are
//! binary pprof data and are routed back through `go tool pprof`.

pub mod classifier;
pub mod dump;

// Re-export main types and functions
pub use classifier::{classify_dump, GoroutineSummary};
pub use dump::{load_dump, sniff_dump, DumpKind};
