//! Goroutines command implementation.
//!
//! Text dumps (`?debug=2` captures) are classified in-process; binary
//! pprof captures are summarized by delegating to `go tool pprof -top`.

use crate::goroutine::{classify_dump, load_dump, DumpKind};
use crate::output::{goroutine_text, print_json, GoroutineReport};
use crate::pprof::render_top_raw;
use anyhow::{bail, Context, Result};
use log::{info, warn};
use std::path::PathBuf;

/// Arguments for the goroutines command
#[derive(Debug, Clone)]
pub struct GoroutinesArgs {
    /// Goroutine dump file (text or binary, optionally gzipped)
    pub dump: PathBuf,

    /// Signatures to show
    pub top: usize,

    /// Emit JSON instead of text
    pub json: bool,
}

/// Execute the goroutines command
pub fn execute_goroutines(args: GoroutinesArgs) -> Result<()> {
    let kind = load_dump(&args.dump)
        .with_context(|| format!("failed to read dump {}", args.dump.display()))?;

    match kind {
        DumpKind::Text(text) => {
            info!("classifying text dump {}", args.dump.display());

            let summary = classify_dump(&text)
                .with_context(|| format!("failed to classify {}", args.dump.display()))?;

            let report =
                GoroutineReport::new(args.dump.display().to_string(), &summary, args.top);

            if args.json {
                print_json(&report).context("failed to serialize goroutine report")?;
            } else {
                print!("{}", goroutine_text(&report));
            }
        }

        DumpKind::Binary => {
            if args.json {
                bail!(
                    "{} is a binary pprof capture; JSON output is only available for text dumps",
                    args.dump.display()
                );
            }

            warn!("input looks binary; falling back to `go tool pprof -top`");
            let rendered = render_top_raw(&args.dump)
                .context("failed to summarize binary dump with pprof")?;
            print!("{rendered}");
        }
    }

    Ok(())
}
