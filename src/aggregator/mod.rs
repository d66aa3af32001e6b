//! Aggregation of parsed report rows into ranked summaries.
//!
//! This module turns flat report rows into:
//! - Top-N function rankings
//! - Per-package byte totals (syntactic grouping on the symbol prefix)

pub mod ranking;

// Re-export main functions
pub use ranking::{group_by_package, group_key, top_groups, top_rows};
