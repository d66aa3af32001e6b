//! Heap summary command implementation.
//!
//! The heap command:
//! 1. Resolves the profile artifact (file or capture directory)
//! 2. Renders it with `go tool pprof -top`
//! 3. Parses the table into rows and totals
//! 4. Ranks top functions and top packages
//! 5. Prints a text or JSON report

use crate::aggregator::{group_by_package, top_groups, top_rows};
use crate::output::{heap_summary_text, print_json, HeapSummaryReport};
use crate::parser::parse_report;
use crate::pprof::{render_top, resolve_profile, Metric};
use crate::utils::config::HEAP_PROFILE_SUFFIX;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Arguments for the heap command
#[derive(Debug, Clone)]
pub struct HeapArgs {
    /// Profile file or directory containing one
    pub profile: PathBuf,

    /// Rank by cumulative allocation bytes instead of live heap
    pub allocs: bool,

    /// Rows to show
    pub top: usize,

    /// Emit JSON instead of text
    pub json: bool,
}

/// Execute the heap command
pub fn execute_heap(args: HeapArgs) -> Result<()> {
    let metric = Metric::from_allocs(args.allocs);

    let profile = resolve_profile(&args.profile, HEAP_PROFILE_SUFFIX)
        .context("failed to resolve heap profile")?;
    info!("summarizing {} under metric {}", profile.display(), metric);

    let text = render_top(&profile, metric).context("failed to render profile")?;

    let report = parse_report(&text);
    debug!("{} rows parsed", report.rows.len());

    let functions = top_rows(&report.rows, args.top);
    let packages = top_groups(&group_by_package(&report.rows), args.top);

    let summary = HeapSummaryReport::new(
        profile.display().to_string(),
        metric,
        report.totals,
        &functions,
        &packages,
    );

    if args.json {
        print_json(&summary).context("failed to serialize heap summary")?;
    } else {
        print!("{}", heap_summary_text(&summary));
    }

    Ok(())
}
