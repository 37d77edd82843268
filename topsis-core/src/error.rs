//! Error types raised while validating inputs or evaluating a decision matrix.
//!
//! Positions stored in the variants are zero-based; the rendered messages
//! count from one so they line up with spreadsheet columns and rows.

use std::fmt;

use thiserror::Error;

/// Identifies which input disagreed with the matrix's criterion count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeSubject {
    /// The weight vector.
    Weights,
    /// The impact vector.
    Impacts,
    /// The optional criterion names.
    CriterionNames,
    /// The values of a single alternative (zero-based row index).
    Alternative(usize),
}

impl fmt::Display for ShapeSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weights => f.write_str("weights"),
            Self::Impacts => f.write_str("impacts"),
            Self::CriterionNames => f.write_str("criterion names"),
            Self::Alternative(index) => write!(f, "alternative {}", index + 1),
        }
    }
}

/// Errors returned by the decision engine and its input constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopsisError {
    /// The matrix has no alternatives or no criteria.
    #[error(
        "decision matrix needs at least one alternative and one criterion \
         (got {alternatives} alternatives and {criteria} criteria)"
    )]
    EmptyInput {
        /// Number of alternatives supplied.
        alternatives: usize,
        /// Number of criteria supplied.
        criteria: usize,
    },
    /// A vector's length does not match the matrix's criterion count.
    #[error("{subject} has {found} entries but the matrix has {expected} criteria")]
    ShapeMismatch {
        /// Input whose length disagreed.
        subject: ShapeSubject,
        /// Criterion count of the matrix.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },
    /// An impact symbol was neither `+` nor `-`.
    #[error("impact {} is {symbol:?}; expected `+` or `-`", .position + 1)]
    InvalidImpactSymbol {
        /// Zero-based criterion position.
        position: usize,
        /// Raw symbol as supplied.
        symbol: String,
    },
    /// A criterion value is missing, non-numeric, or not finite.
    #[error(
        "value {raw:?} for alternative {} criterion {} is not a finite number",
        .alternative + 1,
        .criterion + 1
    )]
    NonNumericValue {
        /// Zero-based row index.
        alternative: usize,
        /// Zero-based criterion index.
        criterion: usize,
        /// Raw value as supplied.
        raw: String,
    },
    /// A weight is not a finite, non-negative number.
    #[error("weight {raw:?} for criterion {} must be a finite, non-negative number", .criterion + 1)]
    InvalidWeight {
        /// Zero-based criterion index.
        criterion: usize,
        /// Raw weight as supplied.
        raw: String,
    },
    /// Every value of a criterion is zero, so its norm is zero.
    #[error("criterion {} has only zero values and cannot be normalised", .criterion + 1)]
    DegenerateCriterion {
        /// Zero-based criterion index.
        criterion: usize,
    },
    /// An alternative coincides with both the ideal-best and ideal-worst points.
    #[error(
        "alternative {} ({label}) is equidistant at zero from both ideal points; \
         its closeness is undefined",
        .alternative + 1
    )]
    UndefinedScore {
        /// Zero-based row index.
        alternative: usize,
        /// Label of the alternative.
        label: String,
    },
}
