//! Diff command implementation.
//!
//! Renders two profiles under the same metric, collapses each report into
//! a snapshot, and ranks the symbols that grew or shrank between them.

use crate::diff::diff_snapshots;
use crate::output::{diff_text, print_json, DiffReport};
use crate::parser::parse_report;
use crate::pprof::{render_top, resolve_profile, Metric};
use crate::utils::config::HEAP_PROFILE_SUFFIX;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Arguments for the diff command
#[derive(Debug, Clone)]
pub struct DiffArgs {
    /// Older profile file or directory containing one
    pub old: PathBuf,

    /// Newer profile file or directory containing one
    pub new: PathBuf,

    /// Compare cumulative allocation bytes instead of live heap
    pub allocs: bool,

    /// Rows to show per direction
    pub top: usize,

    /// Emit JSON instead of text
    pub json: bool,
}

/// Execute the diff command
pub fn execute_diff(args: DiffArgs) -> Result<()> {
    let metric = Metric::from_allocs(args.allocs);

    let old_profile =
        resolve_profile(&args.old, HEAP_PROFILE_SUFFIX).context("failed to resolve old profile")?;
    let new_profile =
        resolve_profile(&args.new, HEAP_PROFILE_SUFFIX).context("failed to resolve new profile")?;

    info!(
        "comparing {} -> {} using metric {}",
        old_profile.display(),
        new_profile.display(),
        metric
    );

    // Both renders use the same metric; snapshots from different metrics
    // are not comparable.
    let old_snapshot = parse_report(
        &render_top(&old_profile, metric).context("failed to render old profile")?,
    )
    .snapshot();
    let new_snapshot = parse_report(
        &render_top(&new_profile, metric).context("failed to render new profile")?,
    )
    .snapshot();

    let outcome = diff_snapshots(&old_snapshot, &new_snapshot, args.top);

    let report = DiffReport::new(
        old_profile.display().to_string(),
        new_profile.display().to_string(),
        metric,
        &outcome,
    );

    if args.json {
        print_json(&report).context("failed to serialize diff report")?;
    } else {
        print!("{}", diff_text(&report));
    }

    Ok(())
}
