//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving a profile artifact on disk
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("no *{pattern} found inside {}", .path.display())]
    NoProfileFound { path: PathBuf, pattern: String },

    #[error("{} is neither file nor directory", .0.display())]
    NotFileOrDirectory(PathBuf),
}

/// Errors that can occur while invoking `go tool pprof`
#[derive(Error, Debug)]
pub enum RendererError {
    #[error("Go toolchain not in PATH (`go` command missing)")]
    ToolchainMissing,

    #[error("go tool pprof failed on {}:\n{stderr}", .profile.display())]
    PprofFailed { profile: PathBuf, stderr: String },

    #[error("failed to run go tool pprof: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during report parsing
///
/// `MalformedSizeLiteral` is recoverable: the report parser treats it as
/// "this line is not a table row" and skips the line.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed size literal: {0:?}")]
    MalformedSizeLiteral(String),
}

/// Errors that can occur while classifying a goroutine dump
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("no goroutine stacks found (did you pass ?debug=2 output?)")]
    NoStacksFound,
}
