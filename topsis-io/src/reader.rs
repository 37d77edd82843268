//! Reading decision tables from CSV.

use std::collections::HashSet;
use std::io::{BufReader, Read};

use camino::Utf8Path;
use log::{debug, warn};
use topsis_core::{DecisionMatrix, TopsisError};

use crate::{TableError, fs};

/// A decision matrix together with the raw table it was parsed from.
///
/// The raw cells are kept so results can be written back exactly as the
/// caller supplied them.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    matrix: DecisionMatrix,
}

impl DecisionTable {
    /// Header cells, starting with the label column.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Raw cells of every data row, in input order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The validated matrix.
    #[must_use]
    pub const fn matrix(&self) -> &DecisionMatrix {
        &self.matrix
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Report whether the table has no data rows.
    ///
    /// Always `false` for a successfully parsed table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read and validate a decision table from a CSV file.
///
/// # Errors
/// Returns [`TableError::Open`] when the file cannot be opened, and the
/// errors of [`parse_decision_table`].
pub fn read_decision_table(path: &Utf8Path) -> Result<DecisionTable, TableError> {
    let file = fs::open_input(path).map_err(|source| TableError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_decision_table(BufReader::new(file))?;
    debug!(
        "Read {} alternatives with {} criteria from {path}",
        table.matrix.alternative_count(),
        table.matrix.criterion_count()
    );
    Ok(table)
}

/// Parse a decision table from CSV text.
///
/// The first row is the header. The first column holds alternative labels;
/// every other column is a numeric criterion. Cells are trimmed and blank
/// lines are skipped.
///
/// # Errors
/// - [`TableError::MissingHeader`] for empty input.
/// - [`TableError::RaggedRow`] when a row's cell count differs from the
///   header's.
/// - [`TableError::ReadRecord`] for malformed CSV.
/// - [`TableError::Invalid`] for non-numeric cells, or when there are no
///   data rows or no criterion columns.
///
/// # Examples
/// ```
/// use topsis_io::parse_decision_table;
///
/// let csv = "Model,Price,Storage\nP1,250,16\nP2,200,32\n";
/// let table = parse_decision_table(csv.as_bytes()).expect("valid table");
/// assert_eq!(table.matrix().criterion_count(), 2);
/// assert_eq!(table.headers()[0], "Model");
/// ```
pub fn parse_decision_table<R: Read>(reader: R) -> Result<DecisionTable, TableError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|source| TableError::ReadRecord { line: 1, source })?
        .iter()
        .map(str::to_owned)
        .collect();
    if headers.is_empty() {
        return Err(TableError::MissingHeader);
    }
    warn_on_blank_headers(&headers);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|source| TableError::ReadRecord {
            line: source.position().map_or(0, csv::Position::line),
            source,
        })?;
        if record.len() != headers.len() {
            return Err(TableError::RaggedRow {
                line: record.position().map_or(0, csv::Position::line),
                expected: headers.len(),
                found: record.len(),
            });
        }
        rows.push(record.iter().map(str::to_owned).collect::<Vec<_>>());
    }

    let criteria = headers.len().saturating_sub(1);
    if rows.is_empty() {
        return Err(TopsisError::EmptyInput {
            alternatives: 0,
            criteria,
        }
        .into());
    }
    warn_on_duplicate_labels(&rows);

    let criterion_names = headers.get(1..).map(<[String]>::to_vec).unwrap_or_default();
    let matrix = DecisionMatrix::parse(rows.iter().map(|row| match row.split_first() {
        Some((label, cells)) => (label.clone(), cells),
        None => (String::new(), &[][..]),
    }))?
    .with_criterion_names(criterion_names)?;

    Ok(DecisionTable {
        headers,
        rows,
        matrix,
    })
}

fn warn_on_blank_headers(headers: &[String]) {
    for (column, header) in headers.iter().enumerate() {
        if header.is_empty() {
            warn!("Header cell in column {} is blank", column + 1);
        }
    }
}

fn warn_on_duplicate_labels(rows: &[Vec<String>]) {
    let mut seen = HashSet::new();
    for label in rows.iter().filter_map(|row| row.first()) {
        if !seen.insert(label.as_str()) {
            warn!("Alternative label {label:?} appears more than once");
        }
    }
}
