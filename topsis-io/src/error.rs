//! Errors raised while reading decision tables or writing results.

use camino::Utf8PathBuf;
use thiserror::Error;
use topsis_core::TopsisError;

/// Errors raised while reading, converting, or exporting tables.
#[derive(Debug, Error)]
pub enum TableError {
    /// Opening the input file failed.
    #[error("failed to open decision table at {path}")]
    Open {
        /// Requested input path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The CSV payload could not be decoded.
    #[error("failed to read CSV record on line {line}")]
    ReadRecord {
        /// One-based line number, counting the header.
        line: u64,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// The input had no header row.
    #[error("decision table is empty; expected a header row")]
    MissingHeader,
    /// A data row has a different number of cells from the header.
    #[error("line {line} has {found} cells but the header has {expected}")]
    RaggedRow {
        /// One-based line number, counting the header.
        line: u64,
        /// Number of header cells.
        expected: usize,
        /// Number of cells on the offending line.
        found: usize,
    },
    /// The cells did not form a valid decision matrix.
    #[error(transparent)]
    Invalid(#[from] TopsisError),
    /// The evaluation does not cover every row of the table.
    #[error("evaluation covers {scores} alternatives but the table has {rows} rows")]
    EvaluationMismatch {
        /// Rows in the decision table.
        rows: usize,
        /// Alternatives in the evaluation.
        scores: usize,
    },
    /// Creating the output file failed.
    #[error("failed to create result file at {path}")]
    Create {
        /// Target output path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Writing CSV output failed.
    #[error("failed to write CSV result")]
    WriteCsv(#[source] csv::Error),
    /// Serialising JSON output failed.
    #[error("failed to write JSON result")]
    WriteJson(#[source] serde_json::Error),
    /// Flushing or finishing the output failed.
    #[error("failed to write result")]
    Write(#[source] std::io::Error),
}
