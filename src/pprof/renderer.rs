//! `go tool pprof` subprocess wrapper.
//!
//! Binary pprof decoding stays in the Go toolchain: we only ask it to
//! render the `-top` table and hand the text to our parser.

use crate::utils::config::PPROF_NODE_COUNT;
use crate::utils::error::RendererError;
use log::debug;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

/// The quantity pprof is asked to rank by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Live in-use heap bytes
    InuseSpace,
    /// Cumulative allocation bytes
    AllocSpace,
}

impl Metric {
    /// Map the CLI `--allocs` switch to a metric
    pub fn from_allocs(allocs: bool) -> Self {
        if allocs {
            Metric::AllocSpace
        } else {
            Metric::InuseSpace
        }
    }

    /// Metric name as pprof and our JSON output spell it
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::InuseSpace => "inuse_space",
            Metric::AllocSpace => "alloc_space",
        }
    }

    /// pprof command-line flag for this metric
    fn flag(&self) -> &'static str {
        match self {
            Metric::InuseSpace => "-inuse_space",
            Metric::AllocSpace => "-alloc_space",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a profile as a `-top` table under the given metric
///
/// # Errors
/// * `RendererError::ToolchainMissing` - `go` not on PATH
/// * `RendererError::PprofFailed` - pprof exited non-zero; its stderr is
///   carried verbatim
pub fn render_top(profile: &Path, metric: Metric) -> Result<String, RendererError> {
    run_pprof(
        profile,
        &[
            "tool",
            "pprof",
            "-top",
            metric.flag(),
            &format!("--nodecount={PPROF_NODE_COUNT}"),
        ],
    )
}

/// Render a profile as a `-top` table with pprof's default metric
///
/// Used as the fallback for binary goroutine dumps, where no byte metric
/// applies.
pub fn render_top_raw(profile: &Path) -> Result<String, RendererError> {
    run_pprof(profile, &["tool", "pprof", "-top"])
}

fn run_pprof(profile: &Path, args: &[&str]) -> Result<String, RendererError> {
    debug!("running go {} {}", args.join(" "), profile.display());

    let output = Command::new("go")
        .args(args)
        .arg(profile)
        .output()
        .map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                RendererError::ToolchainMissing
            } else {
                RendererError::Io(err)
            }
        })?;

    if !output.status.success() {
        return Err(RendererError::PprofFailed {
            profile: profile.to_path_buf(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_from_allocs() {
        assert_eq!(Metric::from_allocs(false), Metric::InuseSpace);
        assert_eq!(Metric::from_allocs(true), Metric::AllocSpace);
    }

    #[test]
    fn test_metric_names() {
        assert_eq!(Metric::InuseSpace.as_str(), "inuse_space");
        assert_eq!(Metric::AllocSpace.flag(), "-alloc_space");
        assert_eq!(Metric::AllocSpace.to_string(), "alloc_space");
    }
}
