use crate::ManaCurve;
use serde::{Deserialize, Serialize};

pub const MAINBOARD_COUNT: usize = 62;
pub const LAND_COUNT: usize = 37;

/// How many terms of each kind go into an automatically derived theme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeSettings {
    pub keyword_amount: usize,
    pub otag_amount: usize,
    pub atag_amount: usize,
    pub type_amount: usize,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            keyword_amount: 1,
            otag_amount: 1,
            atag_amount: 1,
            type_amount: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckConfig {
    pub mainboard_count: usize,
    pub land_count: usize,
    #[serde(default)]
    pub curve: ManaCurve,
    #[serde(default)]
    pub theme: ThemeSettings,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            mainboard_count: MAINBOARD_COUNT,
            land_count: LAND_COUNT,
            curve: ManaCurve::default(),
            theme: ThemeSettings::default(),
        }
    }
}
