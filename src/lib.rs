//! pprof-triage
//!
//! Summarize and diff Go pprof artifacts: heap profiles rendered through
//! `go tool pprof -top`, and goroutine dumps classified directly.
//!
//! This crate provides the core implementation for the `pprof-triage`
//! CLI tool. The parsing, aggregation, and differencing engines are pure
//! and can be fed canned report text without any Go toolchain present.

pub mod aggregator;
pub mod commands;
pub mod diff;
pub mod goroutine;
pub mod output;
pub mod parser;
pub mod pprof;
pub mod utils;
