use crate::{CostBucket, RngState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurveWeight {
    pub bucket: CostBucket,
    pub weight: u32,
}

/// Target distribution of mainboard cards across cost buckets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManaCurve {
    pub weights: Vec<CurveWeight>,
}

impl Default for ManaCurve {
    // Leans towards two drops.
    fn default() -> Self {
        Self::from_pairs(&[
            (CostBucket::OneOrLess, 8),
            (CostBucket::Two, 14),
            (CostBucket::Three, 12),
            (CostBucket::Four, 10),
            (CostBucket::Five, 8),
            (CostBucket::Six, 6),
            (CostBucket::SevenOrMore, 4),
        ])
    }
}

impl ManaCurve {
    pub fn from_pairs(pairs: &[(CostBucket, u32)]) -> Self {
        Self {
            weights: pairs
                .iter()
                .map(|&(bucket, weight)| CurveWeight { bucket, weight })
                .collect(),
        }
    }

    pub fn total_weight(&self) -> u64 {
        self.weights.iter().map(|w| u64::from(w.weight)).sum()
    }

    pub fn weight_of(&self, bucket: CostBucket) -> u64 {
        self.weights
            .iter()
            .filter(|w| w.bucket == bucket)
            .map(|w| u64::from(w.weight))
            .sum()
    }

    /// Draws a bucket with probability proportional to its weight. `None`
    /// only when every weight is zero.
    pub fn sample(&self, rng: &mut RngState) -> Option<CostBucket> {
        pick_weighted(self.weights.iter().map(|w| (w.bucket, w.weight)), rng)
    }
}

fn pick_weighted<T: Clone>(items: impl Iterator<Item = (T, u32)>, rng: &mut RngState) -> Option<T> {
    let items: Vec<(T, u64)> = items
        .filter(|(_, w)| *w > 0)
        .map(|(item, w)| (item, u64::from(w)))
        .collect();
    let total: u64 = items.iter().map(|(_, w)| *w).sum();
    if total == 0 {
        return None;
    }
    let mut roll = rng.next_u64() % total;
    for (item, weight) in items {
        if roll < weight {
            return Some(item);
        }
        roll -= weight;
    }
    None
}
