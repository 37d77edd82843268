//! CSV and JSON adapters for the TOPSIS engine.
//!
//! [`read_decision_table`] turns a labelled CSV file into a validated
//! [`topsis_core::DecisionMatrix`] while keeping the raw cells, and
//! [`export_result`] writes that table back out with `Topsis Score` and
//! `Rank` columns appended.
#![forbid(unsafe_code)]

mod error;
pub mod fs;
mod reader;
mod result;

pub use error::TableError;
pub use reader::{DecisionTable, parse_decision_table, read_decision_table};
pub use result::{ExportFormat, RANK_HEADER, ResultTable, SCORE_HEADER, export_result};
