use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One extracted cell. `None` means the extraction engine reported no
/// content at that position.
pub type Cell = Option<String>;

/// One row of raw table data. Lengths vary row to row.
pub type RawRow = Vec<Cell>;

/// A table exactly as the extraction engine returned it. No shape
/// guarantees: rows may be empty, blank, or of differing lengths, and the
/// table may have fewer than two rows.
pub type RawTable = Vec<RawRow>;

/// A rectangular table: unique non-empty header, every row exactly as wide
/// as the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Counters accumulated while converting one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    pub source: PathBuf,
    pub output_path: PathBuf,
    pub tables_found: usize,
    pub tables_used: usize,
    pub rows_written: usize,
}

/// Aggregate outcome of one batch run, serialized for `--json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub files_found: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub rows_written: usize,
    pub reports: Vec<DocumentReport>,
}
