//! Line-by-line parser for pprof's `-top` table output.
//!
//! The parser is deliberately permissive: any line that does not look like
//! a table row (headers, blanks, summary lines) is silently skipped, so the
//! tool survives pprof output drift as long as the size literal leads the
//! row and the symbol is the last token.

use super::schema::{HeapReport, ReportRow, Totals};
use super::size::{find_size_literals, parse_size};
use log::debug;

/// Parse a rendered report into rows and optional totals
///
/// A line is a table row when its first whitespace-delimited token parses
/// as a size literal and a distinct trailing token (the symbol) exists.
/// If a line carries more than one size-literal-shaped value, only the
/// first supplies the row's byte count.
pub fn parse_report(text: &str) -> HeapReport {
    let mut rows = Vec::new();
    let mut totals = None;

    for line in text.lines() {
        let line = line.trim();

        if line.starts_with("Total:") {
            // Only the first Total line counts
            if totals.is_none() {
                totals = parse_totals_line(line);
            }
            continue;
        }

        if let Some(row) = parse_row_line(line) {
            rows.push(row);
        }
    }

    debug!(
        "parsed {} rows, totals {}",
        rows.len(),
        if totals.is_some() { "present" } else { "absent" }
    );

    HeapReport { rows, totals }
}

/// Try to parse one line as a table row, `None` if it does not match
fn parse_row_line(line: &str) -> Option<ReportRow> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next()?;
    // The symbol is the last token; requiring it from the back also rejects
    // single-token lines.
    let symbol = tokens.next_back()?;

    let bytes = parse_size(first).ok()?;

    Some(ReportRow {
        bytes,
        symbol: symbol.to_string(),
    })
}

/// Parse a "Total:" line into (accounted, unaccounted) byte counts
///
/// Lines with fewer than two size literals yield no totals.
fn parse_totals_line(line: &str) -> Option<Totals> {
    let literals = find_size_literals(line);
    if literals.len() < 2 {
        return None;
    }

    Some(Totals {
        accounted: literals[0],
        unaccounted: literals[1],
    })
}
