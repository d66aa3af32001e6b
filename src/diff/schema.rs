//! Types produced by the differencing engine.

/// Signed per-symbol byte delta between two snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaRecord {
    /// Fully-qualified symbol name
    pub symbol: String,

    /// `new bytes - old bytes`, absent side counted as zero
    pub delta: i64,
}

/// Ranked growth and shrink lists from one comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOutcome {
    /// Symbols that gained bytes, largest gain first
    pub growth: Vec<DeltaRecord>,

    /// Symbols that lost bytes, largest loss first
    pub shrink: Vec<DeltaRecord>,
}
