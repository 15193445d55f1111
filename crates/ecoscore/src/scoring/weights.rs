use serde::{Deserialize, Serialize};

use super::ScoringError;
use crate::submissions::coerce;

/// Allowed drift of a weight triple's sum away from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Relative importance of emissions, circularity, and cost in the final score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTriple {
    #[serde(deserialize_with = "coerce::number")]
    pub gwp: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub circularity: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub cost: f64,
}

impl WeightTriple {
    pub const DEFAULT: Self = Self::new(0.40, 0.35, 0.25);

    pub const fn new(gwp: f64, circularity: f64, cost: f64) -> Self {
        Self {
            gwp,
            circularity,
            cost,
        }
    }

    fn components(&self) -> [(&'static str, f64); 3] {
        [
            ("gwp", self.gwp),
            ("circularity", self.circularity),
            ("cost", self.cost),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.gwp + self.circularity + self.cost
    }

    /// Accepts triples whose components each lie in `[0, 1]` and whose sum
    /// lies within [`WEIGHT_SUM_TOLERANCE`] of 1.0.
    pub fn validate(&self) -> Result<(), ScoringError> {
        for (component, value) in self.components() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ScoringError::WeightOutOfRange { component, value });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE {
            Ok(())
        } else {
            Err(ScoringError::InvalidWeights { sum })
        }
    }
}

impl Default for WeightTriple {
    fn default() -> Self {
        Self::DEFAULT
    }
}
