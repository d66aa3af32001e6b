//! Top-N ranking and package grouping over report rows.

use crate::parser::ReportRow;
use log::debug;
use std::collections::HashMap;

/// Rank rows by byte count and keep the heaviest `n`
///
/// Ordering is descending by bytes with ties broken by symbol name
/// ascending, so the output is deterministic for equal weights. The
/// operation is idempotent: re-ranking an already ranked list is a no-op.
pub fn top_rows(rows: &[ReportRow], n: usize) -> Vec<ReportRow> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.symbol.cmp(&b.symbol)));
    ranked.truncate(n);
    ranked
}

/// Derive the grouping key for a symbol
///
/// Symbols with a path separator group by the leading path segment
/// (`github.com/lib/pq.Open` -> `github.com`-style import roots stay
/// together); otherwise the receiver/type qualifier before the first `.`
/// is used; a bare symbol is its own group. Purely syntactic, no package
/// metadata lookup.
pub fn group_key(symbol: &str) -> &str {
    if let Some(idx) = symbol.find('/') {
        &symbol[..idx]
    } else if let Some(idx) = symbol.find('.') {
        &symbol[..idx]
    } else {
        symbol
    }
}

/// Sum bytes per group key
///
/// Zero-byte rows still create their group entry; groups are never
/// fabricated for symbols that do not appear in the input.
pub fn group_by_package(rows: &[ReportRow]) -> HashMap<String, u64> {
    let mut groups: HashMap<String, u64> = HashMap::new();

    for row in rows {
        *groups.entry(group_key(&row.symbol).to_string()).or_insert(0) += row.bytes;
    }

    debug!("grouped {} rows into {} packages", rows.len(), groups.len());
    groups
}

/// Rank grouped byte totals, same ordering rule as [`top_rows`]
pub fn top_groups(groups: &HashMap<String, u64>, n: usize) -> Vec<(String, u64)> {
    let mut ranked: Vec<(String, u64)> = groups
        .iter()
        .map(|(key, bytes)| (key.clone(), *bytes))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}
