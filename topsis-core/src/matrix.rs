//! Decision matrices: labelled alternatives scored against numeric criteria.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{ShapeSubject, TopsisError};

/// A single row of the decision matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Alternative {
    label: String,
    values: Vec<f64>,
}

impl Alternative {
    /// Construct an alternative from its label and criterion values.
    ///
    /// Values are validated when the alternative joins a [`DecisionMatrix`].
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// Label identifying the alternative.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Criterion values in column order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Validated N x M matrix of alternatives against criteria.
///
/// Every row carries exactly M finite values, with N >= 1 and M >= 1.
///
/// # Examples
/// ```
/// use topsis_core::{Alternative, DecisionMatrix};
///
/// # fn main() -> Result<(), topsis_core::TopsisError> {
/// let matrix = DecisionMatrix::new(vec![
///     Alternative::new("A", vec![250.0, 16.0]),
///     Alternative::new("B", vec![200.0, 16.0]),
/// ])?;
/// assert_eq!(matrix.alternative_count(), 2);
/// assert_eq!(matrix.criterion_count(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DecisionMatrix {
    alternatives: Vec<Alternative>,
    criterion_count: usize,
    criterion_names: Option<Vec<String>>,
}

impl DecisionMatrix {
    /// Validate and construct a matrix.
    ///
    /// # Errors
    /// - [`TopsisError::EmptyInput`] when there are no rows or no columns.
    /// - [`TopsisError::ShapeMismatch`] when a row's length differs from the
    ///   first row's.
    /// - [`TopsisError::NonNumericValue`] when a value is NaN or infinite.
    pub fn new(alternatives: Vec<Alternative>) -> Result<Self, TopsisError> {
        let criterion_count = alternatives
            .first()
            .map_or(0, |alternative| alternative.values.len());
        if alternatives.is_empty() || criterion_count == 0 {
            return Err(TopsisError::EmptyInput {
                alternatives: alternatives.len(),
                criteria: criterion_count,
            });
        }

        for (row, alternative) in alternatives.iter().enumerate() {
            if alternative.values.len() != criterion_count {
                return Err(TopsisError::ShapeMismatch {
                    subject: ShapeSubject::Alternative(row),
                    expected: criterion_count,
                    found: alternative.values.len(),
                });
            }
            if let Some((criterion, value)) = alternative
                .values
                .iter()
                .enumerate()
                .find(|(_, value)| !value.is_finite())
            {
                return Err(TopsisError::NonNumericValue {
                    alternative: row,
                    criterion,
                    raw: value.to_string(),
                });
            }
        }

        Ok(Self {
            alternatives,
            criterion_count,
            criterion_names: None,
        })
    }

    /// Parse a matrix from labelled rows of textual cells.
    ///
    /// # Errors
    /// Returns [`TopsisError::NonNumericValue`] for cells that do not parse
    /// as finite numbers, and the errors of [`DecisionMatrix::new`].
    ///
    /// # Examples
    /// ```
    /// use topsis_core::{DecisionMatrix, TopsisError};
    ///
    /// let matrix = DecisionMatrix::parse([("A", ["1", "2"]), ("B", ["3", " 4 "])])
    ///     .expect("numeric cells");
    /// assert_eq!(matrix.value(1, 1), Some(4.0));
    ///
    /// let err = DecisionMatrix::parse([("A", ["1", "n/a"])]).expect_err("non-numeric");
    /// assert!(matches!(err, TopsisError::NonNumericValue { criterion: 1, .. }));
    /// ```
    pub fn parse<I, L, R, S>(rows: I) -> Result<Self, TopsisError>
    where
        I: IntoIterator<Item = (L, R)>,
        L: Into<String>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives = rows
            .into_iter()
            .enumerate()
            .map(|(row, (label, cells))| {
                let values = cells
                    .into_iter()
                    .enumerate()
                    .map(|(criterion, cell)| parse_value(cell.as_ref(), row, criterion))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Alternative::new(label, values))
            })
            .collect::<Result<Vec<_>, TopsisError>>()?;
        Self::new(alternatives)
    }

    /// Attach human-readable criterion names.
    ///
    /// # Errors
    /// Returns [`TopsisError::ShapeMismatch`] when the number of names differs
    /// from the criterion count.
    pub fn with_criterion_names(mut self, names: Vec<String>) -> Result<Self, TopsisError> {
        if names.len() != self.criterion_count {
            return Err(TopsisError::ShapeMismatch {
                subject: ShapeSubject::CriterionNames,
                expected: self.criterion_count,
                found: names.len(),
            });
        }
        self.criterion_names = Some(names);
        Ok(self)
    }

    /// Number of alternatives (rows).
    #[must_use]
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Number of criteria (columns).
    #[must_use]
    pub const fn criterion_count(&self) -> usize {
        self.criterion_count
    }

    /// Rows in input order.
    #[must_use]
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Criterion names, when attached.
    #[must_use]
    pub fn criterion_names(&self) -> Option<&[String]> {
        self.criterion_names.as_deref()
    }

    /// Return the value at `alternative`, `criterion`, if in range.
    #[must_use]
    pub fn value(&self, alternative: usize, criterion: usize) -> Option<f64> {
        self.alternatives
            .get(alternative)
            .and_then(|row| row.values.get(criterion))
            .copied()
    }

    /// Iterate over a criterion column in row order.
    ///
    /// Yields nothing when `criterion` is out of range.
    pub fn column(&self, criterion: usize) -> impl Iterator<Item = f64> + '_ {
        self.alternatives
            .iter()
            .filter_map(move |row| row.values.get(criterion).copied())
    }
}

/// Parse a single criterion cell, rejecting blanks, text, NaN and infinities.
///
/// # Errors
/// Returns [`TopsisError::NonNumericValue`] tagged with the cell position.
pub fn parse_value(raw: &str, alternative: usize, criterion: usize) -> Result<f64, TopsisError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| TopsisError::NonNumericValue {
            alternative,
            criterion,
            raw: trimmed.to_owned(),
        })
}
