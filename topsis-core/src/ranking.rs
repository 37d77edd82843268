//! Turning closeness scores into ordinal ranks.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How tied scores share ranks.
///
/// Scores tie only when they are bit-identical. Either way the best score
/// receives rank 1 and tied alternatives receive the same rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RankingPolicy {
    /// Standard competition ranking ("1224"): a tie consumes the ranks it spans.
    #[default]
    Competition,
    /// Dense ranking ("1223"): ranks are consecutive over distinct scores.
    Dense,
}

impl RankingPolicy {
    /// Rank `scores` in descending order of preference.
    ///
    /// The returned vector is aligned with `scores`.
    ///
    /// # Examples
    /// ```
    /// use topsis_core::RankingPolicy;
    ///
    /// let scores = [0.4, 0.9, 0.4, 0.1];
    /// assert_eq!(RankingPolicy::Competition.rank(&scores), vec![2, 1, 2, 4]);
    /// assert_eq!(RankingPolicy::Dense.rank(&scores), vec![2, 1, 2, 3]);
    /// ```
    #[must_use]
    pub fn rank(self, scores: &[f64]) -> Vec<usize> {
        let mut ranks = vec![0_usize; scores.len()];
        let mut previous: Option<(u64, usize)> = None;
        let mut distinct = 0_usize;

        for (position, (index, score)) in preference_order(scores).into_iter().enumerate() {
            let bits = score.to_bits();
            let rank = match previous {
                Some((previous_bits, previous_rank)) if previous_bits == bits => previous_rank,
                _ => {
                    distinct += 1;
                    match self {
                        Self::Competition => position + 1,
                        Self::Dense => distinct,
                    }
                }
            };
            if let Some(slot) = ranks.get_mut(index) {
                *slot = rank;
            }
            previous = Some((bits, rank));
        }

        ranks
    }
}

/// Pair each score with its index, sorted by descending score.
///
/// The sort is stable, so equal scores keep their input order.
pub(crate) fn preference_order(scores: &[f64]) -> Vec<(usize, f64)> {
    let mut order: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    order.sort_by(|(_, left), (_, right)| right.total_cmp(left));
    order
}
