//! Facade crate for the TOPSIS decision engine.
//!
//! Re-exports the engine and its input types from `topsis-core`, and the CSV
//! and JSON adapters from `topsis-io` behind the `io` feature.

#![forbid(unsafe_code)]

pub use topsis_core::{
    Alternative, DecisionMatrix, Evaluation, IdealSolution, Impact, Impacts, RankedAlternative,
    RankingPolicy, Separation, ShapeSubject, TopsisError, Weights, evaluate, evaluate_with,
    parse_value,
};

#[cfg(feature = "io")]
pub use topsis_io::{
    DecisionTable, ExportFormat, ResultTable, TableError, export_result, parse_decision_table,
    read_decision_table,
};
