//! Human-readable text rendering of the report schemas.
//!
//! Byte values are rendered in mebibytes with two decimal places.

use super::json::{DiffReport, GoroutineReport, HeapSummaryReport};
use crate::pprof::Metric;
use std::fmt::Write;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Format a byte count as right-aligned mebibytes
pub fn fmt_mib(bytes: u64) -> String {
    format!("{:8.2} MB", bytes as f64 / BYTES_PER_MIB)
}

fn fmt_mib_signed(delta: i64) -> String {
    format!("{:8.2} MB", delta as f64 / BYTES_PER_MIB)
}

fn metric_label(metric: &str) -> &'static str {
    if metric == Metric::AllocSpace.as_str() {
        "allocation bytes"
    } else {
        "live in-use heap"
    }
}

/// Render a single-profile heap summary
pub fn heap_summary_text(report: &HeapSummaryReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Heap profile: {}", report.profile);
    let _ = writeln!(out, " Mode : {}", metric_label(&report.metric));
    if let Some(total) = report.total_inuse_bytes {
        let _ = writeln!(out, " Heap : {} in-use  (idle ignored)", fmt_mib(total));
    }

    let _ = writeln!(out, "\nTop functions:");
    for entry in &report.top_functions {
        let _ = writeln!(out, "  {}  {}", fmt_mib(entry.bytes), entry.function);
    }

    let _ = writeln!(out, "\nTop packages:");
    for entry in &report.top_packages {
        let _ = writeln!(out, "  {}  {}", fmt_mib(entry.bytes), entry.package);
    }

    out
}

/// Render a two-profile diff
pub fn diff_text(report: &DiffReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Comparing {} -> {}  (metric {})",
        report.old_profile, report.new_profile, report.metric
    );

    let _ = writeln!(out, "\nTop growth:");
    for entry in &report.top_growth {
        let _ = writeln!(out, "  +{}  {}", fmt_mib(entry.delta_bytes as u64), entry.function);
    }
    if report.top_growth.is_empty() {
        let _ = writeln!(out, "  (none)");
    }

    let _ = writeln!(out, "\nTop shrink:");
    for entry in &report.top_shrink {
        let _ = writeln!(out, "  {}  {}", fmt_mib_signed(entry.delta_bytes), entry.function);
    }
    if report.top_shrink.is_empty() {
        let _ = writeln!(out, "  (none)");
    }

    out
}

/// Render a goroutine dump classification
pub fn goroutine_text(report: &GoroutineReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Total goroutines: {}\n", report.total_goroutines);

    let _ = writeln!(out, "By scheduler state:");
    for entry in &report.states {
        let _ = writeln!(
            out,
            "  {:<12} {:>6}  ({:5.1}%)",
            entry.state, entry.count, entry.percentage
        );
    }

    let _ = writeln!(
        out,
        "\nTop {} stack signatures:",
        report.top_signatures.len()
    );
    for entry in &report.top_signatures {
        let _ = writeln!(
            out,
            "{:>4} ({:5.1}%)  {}",
            entry.count, entry.percentage, entry.signature
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::json::{DeltaEntry, FunctionEntry, PackageEntry, StateEntry};

    #[test]
    fn test_fmt_mib() {
        assert_eq!(fmt_mib(10 * 1024 * 1024), "   10.00 MB");
        assert_eq!(fmt_mib(1_572_864), "    1.50 MB");
    }

    #[test]
    fn test_heap_summary_sections() {
        let report = HeapSummaryReport {
            profile: "heap.prof".to_string(),
            metric: "inuse_space".to_string(),
            total_inuse_bytes: Some(15 * 1024 * 1024),
            total_idle_bytes: Some(2 * 1024 * 1024),
            top_functions: vec![FunctionEntry {
                bytes: 10 * 1024 * 1024,
                function: "main.A".to_string(),
            }],
            top_packages: vec![PackageEntry {
                bytes: 10 * 1024 * 1024,
                package: "main".to_string(),
            }],
            generated_at: String::new(),
        };

        let text = heap_summary_text(&report);
        assert!(text.contains("Mode : live in-use heap"));
        assert!(text.contains("Top functions:"));
        assert!(text.contains("   10.00 MB  main.A"));
        assert!(text.contains("Top packages:"));
    }

    #[test]
    fn test_diff_signs() {
        let report = DiffReport {
            old_profile: "old".to_string(),
            new_profile: "new".to_string(),
            metric: "inuse_space".to_string(),
            top_growth: vec![DeltaEntry {
                delta_bytes: 2 * 1024 * 1024,
                function: "main.A".to_string(),
            }],
            top_shrink: vec![DeltaEntry {
                delta_bytes: -(2 * 1024 * 1024),
                function: "main.B".to_string(),
            }],
            generated_at: String::new(),
        };

        let text = diff_text(&report);
        assert!(text.contains("+    2.00 MB  main.A"));
        assert!(text.contains("-2.00 MB  main.B"));
    }

    #[test]
    fn test_goroutine_breakdown() {
        let report = GoroutineReport {
            dump: "goroutine.prof".to_string(),
            total_goroutines: 2,
            states: vec![StateEntry {
                state: "running".to_string(),
                count: 2,
                percentage: 100.0,
            }],
            top_signatures: vec![],
            generated_at: String::new(),
        };

        let text = goroutine_text(&report);
        assert!(text.contains("Total goroutines: 2"));
        assert!(text.contains("running"));
        assert!(text.contains("(100.0%)"));
    }
}
