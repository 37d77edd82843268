//! Per-criterion weights.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::TopsisError;

/// Non-negative multipliers applied to each normalised criterion column.
///
/// Weights are raw multipliers; they need not sum to one.
///
/// # Examples
/// ```
/// use topsis_core::Weights;
///
/// let weights: Weights = "1, 2,0.5".parse().expect("valid weights");
/// assert_eq!(weights.as_slice(), &[1.0, 2.0, 0.5]);
/// assert!("1,-1".parse::<Weights>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Weights(Vec<f64>);

impl Weights {
    /// Validate and wrap a vector of weights.
    ///
    /// # Errors
    /// Returns [`TopsisError::InvalidWeight`] for negative or non-finite
    /// entries.
    pub fn new(weights: Vec<f64>) -> Result<Self, TopsisError> {
        if let Some((criterion, weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, weight)| !is_valid_weight(**weight))
        {
            return Err(TopsisError::InvalidWeight {
                criterion,
                raw: weight.to_string(),
            });
        }
        Ok(Self(weights))
    }

    /// Equal weights of `1.0` for `criteria` columns.
    #[must_use]
    pub fn uniform(criteria: usize) -> Self {
        Self(vec![1.0_f64; criteria])
    }

    /// Borrow the weights as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of criteria covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Report whether no weights are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the weights in column order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Multiply every weight by `factor`.
    ///
    /// # Errors
    /// Returns [`TopsisError::InvalidWeight`] when the product is negative
    /// or not finite.
    #[expect(
        clippy::float_arithmetic,
        reason = "scaling weights is a floating-point multiplication"
    )]
    pub fn scaled(&self, factor: f64) -> Result<Self, TopsisError> {
        Self::new(self.0.iter().map(|weight| weight * factor).collect())
    }

    /// Divide every weight by the largest one so the peak becomes `1.0`.
    ///
    /// All-zero weights are returned unchanged.
    #[expect(
        clippy::float_arithmetic,
        reason = "rescaling divides each weight by the peak"
    )]
    pub(crate) fn relative_to_peak(&self) -> Self {
        let peak = self.iter().fold(0.0_f64, f64::max);
        if peak > 0.0_f64 {
            Self(self.0.iter().map(|weight| weight / peak).collect())
        } else {
            self.clone()
        }
    }
}

fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0_f64
}

impl TryFrom<Vec<f64>> for Weights {
    type Error = TopsisError;

    fn try_from(weights: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(weights)
    }
}

impl FromStr for Weights {
    type Err = TopsisError;

    /// Parse a comma-separated list such as `1,1,2,0.5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let weights = s
            .split(',')
            .enumerate()
            .map(|(criterion, raw)| {
                let trimmed = raw.trim();
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|weight| is_valid_weight(*weight))
                    .ok_or_else(|| TopsisError::InvalidWeight {
                        criterion,
                        raw: trimmed.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(weights))
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Weights {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Vec::<f64>::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1,1,1", &[1.0, 1.0, 1.0])]
    #[case(" 0.25 ,2", &[0.25, 2.0])]
    #[case("0", &[0.0])]
    fn parses_comma_separated_weights(#[case] raw: &str, #[case] expected: &[f64]) {
        let weights: Weights = raw.parse().expect("valid weights");
        assert_eq!(weights.as_slice(), expected);
    }

    #[rstest]
    #[case("1,abc", 1, "abc")]
    #[case("-2,1", 0, "-2")]
    #[case("1,inf", 1, "inf")]
    #[case("1,", 1, "")]
    fn rejects_invalid_entries(
        #[case] raw: &str,
        #[case] criterion: usize,
        #[case] expected_raw: &str,
    ) {
        let err = raw.parse::<Weights>().expect_err("invalid weight");
        assert_eq!(
            err,
            TopsisError::InvalidWeight {
                criterion,
                raw: expected_raw.to_owned(),
            }
        );
    }

    #[rstest]
    fn constructor_rejects_nan() {
        let err = Weights::new(vec![1.0, f64::NAN]).expect_err("NaN weight");
        assert!(matches!(err, TopsisError::InvalidWeight { criterion: 1, .. }));
    }

    #[rstest]
    fn scaling_by_negative_factor_fails() {
        let weights = Weights::uniform(2);
        assert!(weights.scaled(-1.0).is_err());
        let doubled = weights.scaled(2.0).expect("positive factor");
        assert_eq!(doubled.as_slice(), &[2.0, 2.0]);
    }

    #[rstest]
    #[case(&[1e200, 1e200], &[1.0, 1.0])]
    #[case(&[1e-200, 1e-200], &[1.0, 1.0])]
    #[case(&[2.0, 4.0], &[0.5, 1.0])]
    #[case(&[0.0, 4.0], &[0.0, 1.0])]
    #[case(&[0.0, 0.0], &[0.0, 0.0])]
    fn relative_weights_peak_at_one(#[case] raw: &[f64], #[case] expected: &[f64]) {
        let weights = Weights::new(raw.to_vec()).expect("valid weights");
        assert_eq!(weights.relative_to_peak().as_slice(), expected);
    }
}
