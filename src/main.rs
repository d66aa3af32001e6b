//! pprof-triage CLI
//!
//! Quick-look diagnostics for Go pprof artifacts: heap summaries, heap
//! diffs, and goroutine dump breakdowns.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use pprof_triage::commands::{
    execute_diff, execute_goroutines, execute_heap, DiffArgs, GoroutinesArgs, HeapArgs,
};
use pprof_triage::utils::config::{DEFAULT_TOP_DIFF, DEFAULT_TOP_SUMMARY};

/// pprof-triage - summarize and diff Go pprof artifacts
#[derive(Parser, Debug)]
#[command(name = "pprof-triage")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a heap profile: top functions and top packages
    Heap {
        /// heap.prof file OR directory containing one
        profile: PathBuf,

        /// Sort by allocation bytes instead of live heap
        #[arg(long)]
        allocs: bool,

        /// Rows to show
        #[arg(long, default_value_t = DEFAULT_TOP_SUMMARY)]
        top: usize,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compare two heap profiles: top growth and top shrink
    Diff {
        /// Older heap.prof file OR directory containing one
        old: PathBuf,

        /// Newer heap.prof file OR directory containing one
        new: PathBuf,

        /// Compare allocation bytes instead of live heap
        #[arg(long)]
        allocs: bool,

        /// Rows to show per direction
        #[arg(long, default_value_t = DEFAULT_TOP_DIFF)]
        top: usize,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Break down a goroutine dump by scheduler state and stack signature
    Goroutines {
        /// Goroutine dump file (text or binary, optionally gzipped)
        dump: PathBuf,

        /// Signatures to show
        #[arg(long, default_value_t = DEFAULT_TOP_SUMMARY)]
        top: usize,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Heap {
            profile,
            allocs,
            top,
            json,
        } => execute_heap(HeapArgs {
            profile,
            allocs,
            top,
            json,
        }),

        Commands::Diff {
            old,
            new,
            allocs,
            top,
            json,
        } => execute_diff(DiffArgs {
            old,
            new,
            allocs,
            top,
            json,
        }),

        Commands::Goroutines { dump, top, json } => {
            execute_goroutines(GoroutinesArgs { dump, top, json })
        }
    }
}
