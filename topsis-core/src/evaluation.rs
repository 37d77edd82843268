//! Output of a single engine invocation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{IdealSolution, Separation};

/// Scores, ranks and intermediate geometry for every alternative.
///
/// All vectors are aligned with the rows of the evaluated matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Evaluation {
    scores: Vec<f64>,
    ranks: Vec<usize>,
    ideal: IdealSolution,
    separations: Vec<Separation>,
}

/// One alternative's position in the final ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankedAlternative {
    /// Row index in the evaluated matrix.
    pub index: usize,
    /// Relative closeness in `0.0..=1.0`.
    pub score: f64,
    /// Ordinal rank, 1 for the best.
    pub rank: usize,
}

impl Evaluation {
    pub(crate) const fn new(
        scores: Vec<f64>,
        ranks: Vec<usize>,
        ideal: IdealSolution,
        separations: Vec<Separation>,
    ) -> Self {
        Self {
            scores,
            ranks,
            ideal,
            separations,
        }
    }

    /// Relative closeness per alternative, in row order.
    #[must_use]
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Rank per alternative, in row order.
    #[must_use]
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// The ideal-best and ideal-worst points.
    #[must_use]
    pub const fn ideal(&self) -> &IdealSolution {
        &self.ideal
    }

    /// Distances to both ideal points, in row order.
    #[must_use]
    pub fn separations(&self) -> &[Separation] {
        &self.separations
    }

    /// Number of evaluated alternatives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Report whether nothing was evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Alternatives ordered by rank; ties keep their input order.
    ///
    /// # Examples
    /// ```
    /// use topsis_core::{DecisionMatrix, Weights, evaluate};
    ///
    /// let matrix = DecisionMatrix::parse([("A", ["1"]), ("B", ["3"]), ("C", ["2"])])
    ///     .expect("valid matrix");
    /// let evaluation = evaluate(&matrix, &Weights::uniform(1), &"+".parse().expect("impacts"))
    ///     .expect("evaluation");
    /// let order: Vec<usize> = evaluation.ranked().map(|entry| entry.index).collect();
    /// assert_eq!(order, vec![1, 2, 0]);
    /// ```
    pub fn ranked(&self) -> impl Iterator<Item = RankedAlternative> + '_ {
        let mut entries: Vec<RankedAlternative> = self
            .scores
            .iter()
            .zip(&self.ranks)
            .enumerate()
            .map(|(index, (score, rank))| RankedAlternative {
                index,
                score: *score,
                rank: *rank,
            })
            .collect();
        entries.sort_by_key(|entry| entry.rank);
        entries.into_iter()
    }

    /// Split into the score and rank vectors.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<usize>) {
        (self.scores, self.ranks)
    }
}
