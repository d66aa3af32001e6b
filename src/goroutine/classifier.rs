//! Stack dump classifier.
//!
//! Splits a text goroutine dump into individual stack traces and tallies
//! them by scheduler state and by signature. The signature is the first
//! live frame of the trace: the innermost call site, which is the most
//! specific locator of what a stuck or hot goroutine is doing.

use crate::utils::error::ClassifyError;
use log::debug;
use std::collections::HashMap;

/// Classification result for one dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoroutineSummary {
    /// Number of stack traces found
    pub total: u64,

    /// Scheduler state -> occurrence count
    pub states: HashMap<String, u64>,

    /// First-frame signature -> occurrence count
    pub signatures: HashMap<String, u64>,
}

impl GoroutineSummary {
    /// All states, highest count first, ties by state name
    pub fn ranked_states(&self) -> Vec<(String, u64, f64)> {
        self.rank(&self.states, usize::MAX)
    }

    /// The `n` most common signatures, highest count first
    pub fn top_signatures(&self, n: usize) -> Vec<(String, u64, f64)> {
        self.rank(&self.signatures, n)
    }

    fn rank(&self, tally: &HashMap<String, u64>, n: usize) -> Vec<(String, u64, f64)> {
        let mut ranked: Vec<(String, u64, f64)> = tally
            .iter()
            .map(|(key, &count)| (key.clone(), count, self.percentage(count)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }

    fn percentage(&self, count: u64) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }
}

/// Classify a text goroutine dump
///
/// Each trace starts with a `goroutine <id> [<state>]:` marker. The text
/// before the first marker is discarded; each segment contributes one
/// record.
///
/// # Errors
/// `ClassifyError::NoStacksFound` when no marker is present (empty or
/// corrupt capture).
pub fn classify_dump(text: &str) -> Result<GoroutineSummary, ClassifyError> {
    let segments = split_stacks(text);
    if segments.is_empty() {
        return Err(ClassifyError::NoStacksFound);
    }

    let mut states: HashMap<String, u64> = HashMap::new();
    let mut signatures: HashMap<String, u64> = HashMap::new();

    for segment in &segments {
        if let Some(state) = extract_state(segment) {
            *states.entry(state.to_string()).or_insert(0) += 1;
        }
        if let Some(signature) = extract_signature(segment) {
            *signatures.entry(signature.to_string()).or_insert(0) += 1;
        }
    }

    debug!(
        "classified {} stacks into {} states, {} signatures",
        segments.len(),
        states.len(),
        signatures.len()
    );

    Ok(GoroutineSummary {
        total: segments.len() as u64,
        states,
        signatures,
    })
}

/// Split the dump at each `goroutine <id> [` marker
///
/// Returned segments start just inside the bracket, so the scheduler state
/// is the leading text of each segment.
fn split_stacks(text: &str) -> Vec<&str> {
    let mut starts = Vec::new();

    for (idx, _) in text.match_indices("goroutine ") {
        let rest = &text[idx + "goroutine ".len()..];
        let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            continue;
        }
        if rest[digits..].starts_with(" [") {
            starts.push(idx + "goroutine ".len() + digits + 2);
        }
    }

    let mut segments = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = if i + 1 < starts.len() {
            // Next segment starts inside the following marker; back up to it
            text[..starts[i + 1]]
                .rfind("goroutine ")
                .unwrap_or(text.len())
        } else {
            text.len()
        };
        segments.push(&text[start..end]);
    }

    segments
}

/// Extract the scheduler state from a segment's leading bracket text
///
/// Qualifiers after the first comma (wait durations such as
/// `chan receive, 3 minutes`) are discarded.
fn extract_state(segment: &str) -> Option<&str> {
    let first_line = segment.lines().next()?;
    let bracket_end = first_line.find("]:")?;
    let state = first_line[..bracket_end]
        .split(',')
        .next()
        .unwrap_or("")
        .trim();

    if state.is_empty() {
        None
    } else {
        Some(state)
    }
}

/// Extract the signature: the first non-blank line after the marker line
fn extract_signature(segment: &str) -> Option<&str> {
    segment
        .lines()
        .skip(1)
        .map(str::trim)
        .find(|line| !line.is_empty())
}
