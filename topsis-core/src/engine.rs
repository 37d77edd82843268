//! The TOPSIS pipeline.
//!
//! `evaluate` runs five stages over a validated [`DecisionMatrix`]:
//!
//! 1. vector-normalise each criterion column to unit Euclidean length;
//! 2. multiply each normalised column by its weight, after dividing every
//!    weight by the largest so extreme magnitudes neither overflow nor
//!    underflow;
//! 3. extract the ideal-best and ideal-worst points using each impact;
//! 4. measure every alternative's Euclidean distance to both points;
//! 5. score relative closeness `d_worst / (d_best + d_worst)` and rank.
//!
//! The engine is pure: it allocates its working matrices locally, performs
//! no I/O and holds no state between calls, so it is safe to call from many
//! threads at once. It reads the whole matrix into memory; callers that need
//! backpressure must cap the input size before calling.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecisionMatrix, Evaluation, Impact, Impacts, RankingPolicy, ShapeSubject, TopsisError,
    Weights,
};

/// Weighted-normalised rows, one `Vec` per alternative.
type WeightedMatrix = Vec<Vec<f64>>;

/// Reference points derived from the weighted matrix.
///
/// Coordinates use the weights divided by their largest entry, so the
/// heaviest criterion spans at most one unit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IdealSolution {
    best: Vec<f64>,
    worst: Vec<f64>,
}

impl IdealSolution {
    /// Per-criterion best attainable weighted value.
    #[must_use]
    pub fn best(&self) -> &[f64] {
        &self.best
    }

    /// Per-criterion worst attainable weighted value.
    #[must_use]
    pub fn worst(&self) -> &[f64] {
        &self.worst
    }

    fn from_weighted(weighted: &[Vec<f64>], impacts: &Impacts) -> Self {
        let criteria = impacts.len();
        let mut lows = vec![f64::INFINITY; criteria];
        let mut highs = vec![f64::NEG_INFINITY; criteria];
        for row in weighted {
            for ((low, high), value) in lows.iter_mut().zip(highs.iter_mut()).zip(row) {
                *low = low.min(*value);
                *high = high.max(*value);
            }
        }

        let (best, worst) = impacts
            .iter()
            .zip(lows.into_iter().zip(highs))
            .map(|(impact, (low, high))| match impact {
                Impact::Maximize => (high, low),
                Impact::Minimize => (low, high),
            })
            .unzip();
        Self { best, worst }
    }
}

/// An alternative's Euclidean distances to the two ideal points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Separation {
    /// Distance to the ideal-best point.
    pub to_best: f64,
    /// Distance to the ideal-worst point.
    pub to_worst: f64,
}

/// Evaluate `matrix` with competition ranking.
///
/// # Errors
/// - [`TopsisError::ShapeMismatch`] when `weights` or `impacts` do not have
///   one entry per criterion.
/// - [`TopsisError::DegenerateCriterion`] when a column is entirely zero.
/// - [`TopsisError::UndefinedScore`] when an alternative sits on both ideal
///   points at once.
///
/// # Examples
/// ```
/// use topsis_core::{DecisionMatrix, Impacts, Weights, evaluate};
///
/// # fn main() -> Result<(), topsis_core::TopsisError> {
/// let matrix = DecisionMatrix::parse([
///     ("A", ["1", "1"]),
///     ("B", ["2", "2"]),
///     ("C", ["3", "3"]),
/// ])?;
/// let weights: Weights = "1,1".parse()?;
/// let impacts: Impacts = "+,+".parse()?;
///
/// let evaluation = evaluate(&matrix, &weights, &impacts)?;
/// assert_eq!(evaluation.ranks(), &[3, 2, 1]);
/// # Ok(())
/// # }
/// ```
pub fn evaluate(
    matrix: &DecisionMatrix,
    weights: &Weights,
    impacts: &Impacts,
) -> Result<Evaluation, TopsisError> {
    evaluate_with(matrix, weights, impacts, RankingPolicy::default())
}

/// Evaluate `matrix`, resolving ties with `policy`.
///
/// # Errors
/// As for [`evaluate`].
pub fn evaluate_with(
    matrix: &DecisionMatrix,
    weights: &Weights,
    impacts: &Impacts,
    policy: RankingPolicy,
) -> Result<Evaluation, TopsisError> {
    check_shape(matrix, weights, impacts)?;
    let norms = column_norms(matrix)?;
    let weighted = weigh(normalise(matrix, &norms), &weights.relative_to_peak());
    let ideal = IdealSolution::from_weighted(&weighted, impacts);
    let separations = separations(&weighted, &ideal);
    let scores = closeness(matrix, &separations)?;
    let ranks = policy.rank(&scores);
    Ok(Evaluation::new(scores, ranks, ideal, separations))
}

fn check_shape(
    matrix: &DecisionMatrix,
    weights: &Weights,
    impacts: &Impacts,
) -> Result<(), TopsisError> {
    let expected = matrix.criterion_count();
    if weights.len() != expected {
        return Err(TopsisError::ShapeMismatch {
            subject: ShapeSubject::Weights,
            expected,
            found: weights.len(),
        });
    }
    if impacts.len() != expected {
        return Err(TopsisError::ShapeMismatch {
            subject: ShapeSubject::Impacts,
            expected,
            found: impacts.len(),
        });
    }
    Ok(())
}

/// Euclidean norm of every column.
///
/// Each column is scaled by its largest magnitude before squaring so very
/// large values do not overflow.
#[expect(
    clippy::float_arithmetic,
    reason = "vector norms require floating-point arithmetic"
)]
fn column_norms(matrix: &DecisionMatrix) -> Result<Vec<f64>, TopsisError> {
    (0..matrix.criterion_count())
        .map(|criterion| {
            let peak = matrix
                .column(criterion)
                .fold(0.0_f64, |peak, value| peak.max(value.abs()));
            if peak == 0.0_f64 {
                return Err(TopsisError::DegenerateCriterion { criterion });
            }
            let sum = matrix
                .column(criterion)
                .map(|value| {
                    let scaled = value / peak;
                    scaled * scaled
                })
                .sum::<f64>();
            Ok(peak * sum.sqrt())
        })
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "normalisation divides each value by its column norm"
)]
fn normalise(matrix: &DecisionMatrix, norms: &[f64]) -> WeightedMatrix {
    matrix
        .alternatives()
        .iter()
        .map(|alternative| {
            alternative
                .values()
                .iter()
                .zip(norms)
                .map(|(value, norm)| value / norm)
                .collect()
        })
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "weighting multiplies normalised values"
)]
fn weigh(mut normalised: WeightedMatrix, weights: &Weights) -> WeightedMatrix {
    for row in &mut normalised {
        for (value, weight) in row.iter_mut().zip(weights.iter()) {
            *value *= weight;
        }
    }
    normalised
}

#[expect(
    clippy::float_arithmetic,
    reason = "Euclidean distance sums squared differences"
)]
fn distance(row: &[f64], point: &[f64]) -> f64 {
    row.iter()
        .zip(point)
        .map(|(value, target)| {
            let delta = value - target;
            delta * delta
        })
        .sum::<f64>()
        .sqrt()
}

fn separations(weighted: &[Vec<f64>], ideal: &IdealSolution) -> Vec<Separation> {
    weighted
        .iter()
        .map(|row| Separation {
            to_best: distance(row, ideal.best()),
            to_worst: distance(row, ideal.worst()),
        })
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "relative closeness is a ratio of distances"
)]
fn closeness(
    matrix: &DecisionMatrix,
    separations: &[Separation],
) -> Result<Vec<f64>, TopsisError> {
    separations
        .iter()
        .zip(matrix.alternatives())
        .enumerate()
        .map(|(index, (separation, alternative))| {
            let total = separation.to_best + separation.to_worst;
            if total == 0.0_f64 {
                return Err(TopsisError::UndefinedScore {
                    alternative: index,
                    label: alternative.label().to_owned(),
                });
            }
            Ok(separation.to_worst / total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Alternative;
    use rstest::{fixture, rstest};

    const TOLERANCE: f64 = 1e-9;

    fn matrix(rows: &[(&str, &[f64])]) -> DecisionMatrix {
        DecisionMatrix::new(
            rows.iter()
                .map(|(label, values)| Alternative::new(*label, values.to_vec()))
                .collect(),
        )
        .expect("valid matrix")
    }

    #[fixture]
    fn monotonic() -> DecisionMatrix {
        matrix(&[("A", &[1.0, 1.0]), ("B", &[2.0, 2.0]), ("C", &[3.0, 3.0])])
    }

    #[expect(clippy::float_arithmetic, reason = "tolerance comparison")]
    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[rstest]
    fn monotonic_criteria_rank_largest_first(monotonic: DecisionMatrix) {
        let evaluation = evaluate(
            &monotonic,
            &Weights::uniform(2),
            &"+,+".parse().expect("impacts"),
        )
        .expect("evaluation");
        assert_eq!(evaluation.ranks(), &[3, 2, 1]);
        assert_close(evaluation.scores().first().copied().unwrap_or(f64::NAN), 0.0);
        assert_close(evaluation.scores().get(1).copied().unwrap_or(f64::NAN), 0.5);
        assert_close(evaluation.scores().get(2).copied().unwrap_or(f64::NAN), 1.0);
    }

    #[rstest]
    fn minimised_criteria_reverse_the_ranking(monotonic: DecisionMatrix) {
        let evaluation = evaluate(
            &monotonic,
            &Weights::uniform(2),
            &"-,-".parse().expect("impacts"),
        )
        .expect("evaluation");
        assert_eq!(evaluation.ranks(), &[1, 2, 3]);
    }

    #[rstest]
    fn normalised_columns_have_unit_length(monotonic: DecisionMatrix) {
        let norms = column_norms(&monotonic).expect("norms");
        let normalised = normalise(&monotonic, &norms);
        for criterion in 0..2 {
            let squares: f64 = normalised
                .iter()
                .filter_map(|row| row.get(criterion))
                .map(|value| value.powi(2))
                .sum();
            assert_close(squares, 1.0);
        }
    }

    #[rstest]
    fn large_magnitudes_do_not_overflow() {
        let huge = matrix(&[("A", &[1e200, 1.0]), ("B", &[2e200, 2.0])]);
        let norms = column_norms(&huge).expect("norms");
        assert!(norms.iter().all(|norm| norm.is_finite()));
        let evaluation = evaluate(&huge, &Weights::uniform(2), &"+,+".parse().expect("impacts"))
            .expect("evaluation");
        assert_eq!(evaluation.ranks(), &[2, 1]);
    }

    #[rstest]
    #[case::huge("1e200,1e200")]
    #[case::tiny("1e-200,1e-200")]
    #[case::unit("1,1")]
    fn extreme_weights_match_unit_weights(#[case] raw: &str) {
        let crossing = matrix(&[("A", &[1.0, 4.0]), ("B", &[2.0, 1.0]), ("C", &[3.0, 3.0])]);
        let weights: Weights = raw.parse().expect("weights");
        let evaluation =
            evaluate(&crossing, &weights, &"+,+".parse().expect("impacts")).expect("evaluation");

        assert_eq!(evaluation.ranks(), &[2, 3, 1]);
        assert!(evaluation.scores().iter().all(|score| (0.0..=1.0).contains(score)));
        let baseline =
            evaluate(&crossing, &Weights::uniform(2), &"+,+".parse().expect("impacts"))
                .expect("evaluation");
        assert_eq!(evaluation.scores(), baseline.scores());
    }

    #[rstest]
    fn all_zero_weights_leave_scores_undefined(monotonic: DecisionMatrix) {
        let zero = Weights::new(vec![0.0, 0.0]).expect("weights");
        let err = evaluate(&monotonic, &zero, &"+,+".parse().expect("impacts"))
            .expect_err("no criterion carries weight");
        assert!(matches!(err, TopsisError::UndefinedScore { alternative: 0, .. }));
    }

    #[rstest]
    fn all_zero_column_is_degenerate() {
        let zeros = matrix(&[("A", &[1.0, 0.0]), ("B", &[2.0, 0.0]), ("C", &[3.0, 0.0])]);
        let err = evaluate(&zeros, &Weights::uniform(2), &"+,+".parse().expect("impacts"))
            .expect_err("zero column");
        assert_eq!(err, TopsisError::DegenerateCriterion { criterion: 1 });
    }

    #[rstest]
    fn weight_length_mismatch_is_reported() {
        let three = matrix(&[("A", &[1.0, 2.0, 3.0]), ("B", &[3.0, 2.0, 1.0])]);
        let err = evaluate(&three, &Weights::uniform(2), &"+,+,+".parse().expect("impacts"))
            .expect_err("two weights for three criteria");
        assert_eq!(
            err,
            TopsisError::ShapeMismatch {
                subject: ShapeSubject::Weights,
                expected: 3,
                found: 2,
            }
        );
    }

    #[rstest]
    fn impact_length_mismatch_is_reported(monotonic: DecisionMatrix) {
        let err = evaluate(&monotonic, &Weights::uniform(2), &"+".parse().expect("impacts"))
            .expect_err("one impact for two criteria");
        assert!(matches!(
            err,
            TopsisError::ShapeMismatch {
                subject: ShapeSubject::Impacts,
                expected: 2,
                found: 1,
            }
        ));
    }

    #[rstest]
    fn single_alternative_has_undefined_score() {
        let single = matrix(&[("Only", &[4.0, 2.0])]);
        let err = evaluate(&single, &Weights::uniform(2), &"+,-".parse().expect("impacts"))
            .expect_err("single alternative");
        assert_eq!(
            err,
            TopsisError::UndefinedScore {
                alternative: 0,
                label: "Only".to_owned(),
            }
        );
    }

    #[rstest]
    fn constant_columns_have_undefined_scores() {
        let constant = matrix(&[("A", &[5.0, 5.0]), ("B", &[5.0, 5.0])]);
        let err = evaluate(&constant, &Weights::uniform(2), &"+,+".parse().expect("impacts"))
            .expect_err("constant matrix");
        assert!(matches!(err, TopsisError::UndefinedScore { alternative: 0, .. }));
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "expected ideal points are computed")]
    fn ideal_solution_follows_impacts(monotonic: DecisionMatrix) {
        let evaluation = evaluate(
            &monotonic,
            &Weights::uniform(2),
            &"+,-".parse().expect("impacts"),
        )
        .expect("evaluation");
        let ideal = evaluation.ideal();
        let column = 14.0_f64.sqrt();
        assert_close(ideal.best().first().copied().unwrap_or(f64::NAN), 3.0 / column);
        assert_close(ideal.worst().first().copied().unwrap_or(f64::NAN), 1.0 / column);
        assert_close(ideal.best().get(1).copied().unwrap_or(f64::NAN), 1.0 / column);
        assert_close(ideal.worst().get(1).copied().unwrap_or(f64::NAN), 3.0 / column);
    }

    #[rstest]
    fn zero_weight_removes_a_criterion() {
        let conflicting = matrix(&[("A", &[1.0, 9.0]), ("B", &[9.0, 1.0])]);
        let evaluation = evaluate(
            &conflicting,
            &Weights::new(vec![0.0, 1.0]).expect("weights"),
            &"+,+".parse().expect("impacts"),
        )
        .expect("evaluation");
        assert_eq!(evaluation.ranks(), &[1, 2]);
    }
}
