//! Data types produced by the report parser.

use std::collections::HashMap;

/// One parsed table row: a byte count and the symbol it is attributed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Flat bytes attributed to this symbol
    pub bytes: u64,

    /// Fully-qualified function/method name (last token of the row)
    pub symbol: String,
}

/// The two size literals from a report's "Total:" line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Total accounted (in-use) bytes
    pub accounted: u64,

    /// Total unaccounted/idle bytes
    pub unaccounted: u64,
}

/// A fully parsed report: rows in source order plus optional totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapReport {
    pub rows: Vec<ReportRow>,
    pub totals: Option<Totals>,
}

/// Symbol -> bytes mapping for one profile snapshot.
///
/// Built last-write-wins: a duplicate symbol within one report keeps the
/// value of its final row.
pub type Snapshot = HashMap<String, u64>;

impl HeapReport {
    /// Collapse the rows into a symbol -> bytes snapshot
    pub fn snapshot(&self) -> Snapshot {
        self.rows
            .iter()
            .map(|row| (row.symbol.clone(), row.bytes))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_last_write_wins() {
        let report = HeapReport {
            rows: vec![
                ReportRow {
                    bytes: 10,
                    symbol: "main.A".to_string(),
                },
                ReportRow {
                    bytes: 20,
                    symbol: "main.A".to_string(),
                },
            ],
            totals: None,
        };

        let snap = report.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap["main.A"], 20);
    }
}
