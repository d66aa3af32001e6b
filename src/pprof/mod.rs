//! External collaborators: the on-disk artifact resolver and the
//! `go tool pprof` report renderer.
//!
//! The core parsing and differencing engines never touch these; they are
//! fed canned report text in tests.

pub mod renderer;
pub mod resolver;

// Re-export main types and functions
pub use renderer::{render_top, render_top_raw, Metric};
pub use resolver::resolve_profile;
