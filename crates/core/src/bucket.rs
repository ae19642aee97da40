use crate::DeckError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A mana value range, labelled the way it appears after `cmc` in a query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CostBucket {
    OneOrLess,
    Two,
    Three,
    Four,
    Five,
    Six,
    SevenOrMore,
}

impl CostBucket {
    pub const ALL: [CostBucket; 7] = [
        CostBucket::OneOrLess,
        CostBucket::Two,
        CostBucket::Three,
        CostBucket::Four,
        CostBucket::Five,
        CostBucket::Six,
        CostBucket::SevenOrMore,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::OneOrLess => "<=1",
            Self::Two => "=2",
            Self::Three => "=3",
            Self::Four => "=4",
            Self::Five => "=5",
            Self::Six => "=6",
            Self::SevenOrMore => ">=7",
        }
    }
}

impl FromStr for CostBucket {
    type Err = DeckError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.label() == value)
            .ok_or_else(|| DeckError::InvalidCostBucket(value.to_string()))
    }
}

impl fmt::Display for CostBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
