//! Core differencing implementation.
//!
//! Both snapshots must have been rendered under the same metric (in-use
//! vs. cumulative allocation bytes); the engine cannot detect a mismatch,
//! so the caller guarantees it.

use super::schema::{DeltaRecord, DiffOutcome};
use crate::parser::Snapshot;
use log::debug;

/// Compute ranked growth and shrink lists between two snapshots
///
/// The full symbol union is visited: a symbol present only in `old`
/// surfaces with its entire byte count as a negative delta, so allocations
/// that vanished between captures still show up in `shrink`.
///
/// Deltas are ordered descending by signed value with ties broken by
/// symbol name. `growth` is the leading run of positive deltas, `shrink`
/// the trailing run of negative deltas read most-negative-first; both are
/// truncated to `top_n`. Zero deltas appear in neither list, so comparing
/// a snapshot against itself yields two empty lists.
pub fn diff_snapshots(old: &Snapshot, new: &Snapshot, top_n: usize) -> DiffOutcome {
    let mut deltas: Vec<DeltaRecord> = Vec::with_capacity(new.len() + old.len());

    for (symbol, &bytes) in new {
        let delta = bytes as i64 - old.get(symbol).copied().unwrap_or(0) as i64;
        deltas.push(DeltaRecord {
            symbol: symbol.clone(),
            delta,
        });
    }

    // Symbols that disappeared entirely still count as shrink
    for (symbol, &bytes) in old {
        if !new.contains_key(symbol) {
            deltas.push(DeltaRecord {
                symbol: symbol.clone(),
                delta: -(bytes as i64),
            });
        }
    }

    deltas.sort_by(|a, b| b.delta.cmp(&a.delta).then_with(|| a.symbol.cmp(&b.symbol)));

    debug!("computed {} deltas", deltas.len());

    // The ordering is monotonic, so both lists stop at the first
    // non-qualifying delta instead of filtering the whole tail.
    let growth = deltas
        .iter()
        .take_while(|d| d.delta > 0)
        .take(top_n)
        .cloned()
        .collect();

    let shrink = deltas
        .iter()
        .rev()
        .take_while(|d| d.delta < 0)
        .take(top_n)
        .cloned()
        .collect();

    DiffOutcome { growth, shrink }
}
