//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod diff;
pub mod goroutines;
pub mod heap;

// Re-export main command functions
pub use diff::{execute_diff, DiffArgs};
pub use goroutines::{execute_goroutines, GoroutinesArgs};
pub use heap::{execute_heap, HeapArgs};
