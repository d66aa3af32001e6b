//! Configuration and constants for the CLI.

/// Default row count for single-profile and goroutine summaries
pub const DEFAULT_TOP_SUMMARY: usize = 15;

/// Default row count for two-profile diffs
pub const DEFAULT_TOP_DIFF: usize = 20;

/// File name suffix searched for when a directory is passed instead of a profile
pub const HEAP_PROFILE_SUFFIX: &str = "heap.prof";

/// Node count passed to pprof so the table is never truncated on its side
pub const PPROF_NODE_COUNT: &str = "99999";

// Byte multipliers for the size literal grammar.
// pprof renders binary units with decimal-looking suffixes: kB here is 1024.
pub const KILOBYTE: u64 = 1024;
pub const MEGABYTE: u64 = 1024 * 1024;
pub const GIGABYTE: u64 = 1024 * 1024 * 1024;
