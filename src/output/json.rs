//! JSON report schemas and stdout writer.
//!
//! These structs are the machine-readable contract of the tool; the text
//! renderer consumes the same structs so both outputs always agree.

use crate::diff::DiffOutcome;
use crate::goroutine::GoroutineSummary;
use crate::parser::{ReportRow, Totals};
use crate::pprof::Metric;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// One ranked function entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionEntry {
    pub bytes: u64,
    pub function: String,
}

/// One ranked package entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageEntry {
    pub bytes: u64,
    pub package: String,
}

/// One ranked delta entry from a diff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeltaEntry {
    pub delta_bytes: i64,
    pub function: String,
}

/// Scheduler state bucket from a goroutine dump
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateEntry {
    pub state: String,
    pub count: u64,
    pub percentage: f64,
}

/// Stack signature bucket from a goroutine dump
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureEntry {
    pub signature: String,
    pub count: u64,
    pub percentage: f64,
}

/// Single-profile heap summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeapSummaryReport {
    /// Resolved profile path
    pub profile: String,

    /// Metric the report was rendered under
    pub metric: String,

    /// Total accounted bytes from the report's Total line, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_inuse_bytes: Option<u64>,

    /// Total unaccounted/idle bytes from the Total line, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_idle_bytes: Option<u64>,

    pub top_functions: Vec<FunctionEntry>,
    pub top_packages: Vec<PackageEntry>,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,
}

/// Two-profile comparison report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffReport {
    pub old_profile: String,
    pub new_profile: String,
    pub metric: String,
    pub top_growth: Vec<DeltaEntry>,
    pub top_shrink: Vec<DeltaEntry>,
    pub generated_at: String,
}

/// Goroutine dump classification report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoroutineReport {
    pub dump: String,
    pub total_goroutines: u64,
    pub states: Vec<StateEntry>,
    pub top_signatures: Vec<SignatureEntry>,
    pub generated_at: String,
}

impl HeapSummaryReport {
    pub fn new(
        profile: String,
        metric: Metric,
        totals: Option<Totals>,
        top_functions: &[ReportRow],
        top_packages: &[(String, u64)],
    ) -> Self {
        Self {
            profile,
            metric: metric.as_str().to_string(),
            total_inuse_bytes: totals.map(|t| t.accounted),
            total_idle_bytes: totals.map(|t| t.unaccounted),
            top_functions: top_functions
                .iter()
                .map(|row| FunctionEntry {
                    bytes: row.bytes,
                    function: row.symbol.clone(),
                })
                .collect(),
            top_packages: top_packages
                .iter()
                .map(|(package, bytes)| PackageEntry {
                    bytes: *bytes,
                    package: package.clone(),
                })
                .collect(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

impl DiffReport {
    pub fn new(old_profile: String, new_profile: String, metric: Metric, outcome: &DiffOutcome) -> Self {
        let to_entries = |records: &[crate::diff::DeltaRecord]| {
            records
                .iter()
                .map(|record| DeltaEntry {
                    delta_bytes: record.delta,
                    function: record.symbol.clone(),
                })
                .collect()
        };

        Self {
            old_profile,
            new_profile,
            metric: metric.as_str().to_string(),
            top_growth: to_entries(&outcome.growth),
            top_shrink: to_entries(&outcome.shrink),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

impl GoroutineReport {
    pub fn new(dump: String, summary: &GoroutineSummary, top_signatures: usize) -> Self {
        Self {
            dump,
            total_goroutines: summary.total,
            states: summary
                .ranked_states()
                .into_iter()
                .map(|(state, count, percentage)| StateEntry {
                    state,
                    count,
                    percentage,
                })
                .collect(),
            top_signatures: summary
                .top_signatures(top_signatures)
                .into_iter()
                .map(|(signature, count, percentage)| SignatureEntry {
                    signature,
                    count,
                    percentage,
                })
                .collect(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Pretty-print any report to stdout
pub fn print_json<T: Serialize>(report: &T) -> serde_json::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, report)?;
    // Trailing newline so shells and pipes behave
    let _ = handle.write_all(b"\n");
    Ok(())
}
