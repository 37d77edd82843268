//! Optimisation direction for each criterion.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::TopsisError;

/// Whether larger or smaller values of a criterion are preferable.
///
/// # Examples
/// ```
/// use topsis_core::Impact;
///
/// assert_eq!("+".parse::<Impact>(), Ok(Impact::Maximize));
/// assert_eq!(Impact::Minimize.symbol(), '-');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Impact {
    /// Larger values are better (a benefit criterion).
    Maximize,
    /// Smaller values are better (a cost criterion).
    Minimize,
}

impl Impact {
    /// Return the conventional one-character symbol, `+` or `-`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Maximize => '+',
            Self::Minimize => '-',
        }
    }

    /// Return the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Maximize => Self::Minimize,
            Self::Minimize => Self::Maximize,
        }
    }

    /// Parse a symbol for the criterion at `position`.
    ///
    /// Accepts `+`/`-` and the words `max`, `maximize`, `min`, `minimize`
    /// in any case, ignoring surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`TopsisError::InvalidImpactSymbol`] for anything else.
    pub fn parse_at(raw: &str, position: usize) -> Result<Self, TopsisError> {
        let symbol = raw.trim();
        match symbol.to_ascii_lowercase().as_str() {
            "+" | "max" | "maximize" | "maximise" => Ok(Self::Maximize),
            "-" | "min" | "minimize" | "minimise" => Ok(Self::Minimize),
            _ => Err(TopsisError::InvalidImpactSymbol {
                position,
                symbol: symbol.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Impact {
    type Err = TopsisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_at(s, 0)
    }
}

/// One [`Impact`] per criterion, in column order.
///
/// # Examples
/// ```
/// use topsis_core::{Impact, Impacts};
///
/// let impacts: Impacts = "+, -,+".parse().expect("valid impacts");
/// assert_eq!(impacts.as_slice(), &[Impact::Maximize, Impact::Minimize, Impact::Maximize]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Impacts(Vec<Impact>);

impl Impacts {
    /// Wrap a vector of impacts.
    #[must_use]
    pub const fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    /// Borrow the impacts as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

    /// Number of criteria covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Report whether no impacts are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the impacts in column order.
    pub fn iter(&self) -> impl Iterator<Item = Impact> + '_ {
        self.0.iter().copied()
    }

    /// Return a copy with the impact at `criterion` reversed.
    ///
    /// Positions outside the vector leave it unchanged.
    #[must_use]
    pub fn with_reversed(&self, criterion: usize) -> Self {
        let mut impacts = self.0.clone();
        if let Some(impact) = impacts.get_mut(criterion) {
            *impact = impact.reversed();
        }
        Self(impacts)
    }
}

impl From<Vec<Impact>> for Impacts {
    fn from(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }
}

impl FromIterator<Impact> for Impacts {
    fn from_iter<T: IntoIterator<Item = Impact>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for Impacts {
    type Err = TopsisError;

    /// Parse a comma-separated list such as `+,+,-,+`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .enumerate()
            .map(|(position, raw)| Impact::parse_at(raw, position))
            .collect()
    }
}

impl fmt::Display for Impacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, impact) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(",")?;
            }
            write!(f, "{impact}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("+", Impact::Maximize)]
    #[case(" - ", Impact::Minimize)]
    #[case("MAX", Impact::Maximize)]
    #[case("minimize", Impact::Minimize)]
    fn parses_known_symbols(#[case] raw: &str, #[case] expected: Impact) {
        assert_eq!(raw.parse::<Impact>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_symbol_with_position() {
        let err = "+,*,-".parse::<Impacts>().expect_err("`*` is not an impact");
        assert_eq!(
            err,
            TopsisError::InvalidImpactSymbol {
                position: 1,
                symbol: "*".to_owned(),
            }
        );
    }

    #[rstest]
    fn rejects_empty_entries() {
        let err = "+,,-".parse::<Impacts>().expect_err("empty entry");
        assert!(matches!(
            err,
            TopsisError::InvalidImpactSymbol { position: 1, .. }
        ));
    }

    #[rstest]
    fn reversing_flips_only_the_requested_criterion() {
        let impacts: Impacts = "+,+".parse().expect("valid impacts");
        let flipped = impacts.with_reversed(1);
        assert_eq!(flipped.as_slice(), &[Impact::Maximize, Impact::Minimize]);
        assert_eq!(impacts.with_reversed(5), impacts);
    }

    #[rstest]
    fn display_round_trips_symbols() {
        let impacts: Impacts = "max,min,+".parse().expect("valid impacts");
        assert_eq!(impacts.to_string(), "+,-,+");
    }
}
