use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade derived from a sustainability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    A,
    B,
    C,
    D,
    F,
}

impl Rating {
    pub const fn ordered() -> [Self; 5] {
        [Self::A, Self::B, Self::C, Self::D, Self::F]
    }

    /// Bands are inclusive on their lower bound. Anything below 40, including
    /// NaN, grades as `F`.
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            Self::A
        } else if score >= 70.0 {
            Self::B
        } else if score >= 55.0 {
            Self::C
        } else if score >= 40.0 {
            Self::D
        } else {
            Self::F
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
