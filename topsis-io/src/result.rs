//! Result tables: the input table with score and rank columns appended.

use std::io::{BufWriter, Write};

use camino::Utf8Path;
use log::info;
use serde_json::{Map, Value};
use topsis_core::Evaluation;

use crate::{DecisionTable, TableError, fs};

/// Header of the appended closeness-score column.
pub const SCORE_HEADER: &str = "Topsis Score";
/// Header of the appended rank column.
pub const RANK_HEADER: &str = "Rank";

/// Serialisation format for exported results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// A JSON array with one object per alternative.
    Json,
}

impl ExportFormat {
    /// Infer the format from a file extension, case-insensitively.
    ///
    /// Returns `None` for paths without a recognised extension.
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        let extension = path.extension()?;
        if extension.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// A decision table paired with the evaluation computed from it.
#[derive(Debug, Clone, Copy)]
pub struct ResultTable<'a> {
    table: &'a DecisionTable,
    evaluation: &'a Evaluation,
}

impl<'a> ResultTable<'a> {
    /// Pair a table with its evaluation.
    ///
    /// # Errors
    /// Returns [`TableError::EvaluationMismatch`] when the evaluation does not
    /// have exactly one score per table row.
    pub fn new(table: &'a DecisionTable, evaluation: &'a Evaluation) -> Result<Self, TableError> {
        if table.len() != evaluation.len() {
            return Err(TableError::EvaluationMismatch {
                rows: table.len(),
                scores: evaluation.len(),
            });
        }
        Ok(Self { table, evaluation })
    }

    /// Output header: the input header followed by score and rank.
    pub fn headers(&self) -> impl Iterator<Item = &str> + '_ {
        self.table
            .headers()
            .iter()
            .map(String::as_str)
            .chain([SCORE_HEADER, RANK_HEADER])
    }

    /// Number of result rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Report whether there are no result rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Write the result as CSV, preserving the input cells verbatim.
    ///
    /// # Errors
    /// Returns [`TableError::WriteCsv`] or [`TableError::Write`] when the
    /// writer fails.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), TableError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer
            .write_record(self.headers())
            .map_err(TableError::WriteCsv)?;
        for ((cells, score), rank) in self
            .table
            .rows()
            .iter()
            .zip(self.evaluation.scores())
            .zip(self.evaluation.ranks())
        {
            let trailer = [score.to_string(), rank.to_string()];
            csv_writer
                .write_record(cells.iter().map(String::as_str).chain(trailer.iter().map(String::as_str)))
                .map_err(TableError::WriteCsv)?;
        }
        csv_writer.flush().map_err(TableError::Write)
    }

    /// Build one JSON object per alternative.
    ///
    /// The label keeps its header and a string value. Criterion keys are the
    /// matrix's criterion names, falling back to the remaining headers, and
    /// their values are numbers. Score and rank come last.
    #[must_use]
    pub fn to_json_records(&self) -> Vec<Value> {
        let headers = self.table.headers();
        let matrix = self.table.matrix();
        let label_key = headers.first().map_or("", String::as_str);
        let criterion_keys = matrix
            .criterion_names()
            .or_else(|| headers.get(1..))
            .unwrap_or_default();
        matrix
            .alternatives()
            .iter()
            .zip(self.evaluation.scores())
            .zip(self.evaluation.ranks())
            .map(|((alternative, &score), &rank)| {
                let mut record = Map::new();
                record.insert(label_key.to_owned(), Value::from(alternative.label()));
                for (key, &value) in criterion_keys.iter().zip(alternative.values()) {
                    record.insert(key.clone(), Value::from(value));
                }
                record.insert(SCORE_HEADER.to_owned(), Value::from(score));
                record.insert(RANK_HEADER.to_owned(), Value::from(rank));
                Value::Object(record)
            })
            .collect()
    }

    /// Write the result as a pretty-printed JSON array.
    ///
    /// # Errors
    /// Returns [`TableError::WriteJson`] or [`TableError::Write`] when the
    /// writer fails.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), TableError> {
        serde_json::to_writer_pretty(&mut writer, &self.to_json_records())
            .map_err(TableError::WriteJson)?;
        writer.write_all(b"\n").map_err(TableError::Write)?;
        writer.flush().map_err(TableError::Write)
    }

    /// Write the result in the requested format.
    ///
    /// # Errors
    /// Propagates the errors of [`Self::write_csv`] and [`Self::write_json`].
    pub fn write<W: Write>(&self, writer: W, format: ExportFormat) -> Result<(), TableError> {
        match format {
            ExportFormat::Csv => self.write_csv(writer),
            ExportFormat::Json => self.write_json(writer),
        }
    }
}

/// Write a result table to `path`, creating parent directories as needed.
///
/// # Errors
/// Returns [`TableError::Create`] when the file cannot be created, and the
/// write errors of [`ResultTable::write`].
pub fn export_result(
    path: &Utf8Path,
    result: &ResultTable<'_>,
    format: ExportFormat,
) -> Result<(), TableError> {
    let file = fs::create_output(path).map_err(|source| TableError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    result.write(BufWriter::new(file), format)?;
    info!("Wrote {} ranked alternatives to {path}", result.len());
    Ok(())
}
