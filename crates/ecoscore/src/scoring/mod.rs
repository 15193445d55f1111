//! Weighted sustainability score, letter grades, and issue detection.

pub mod issues;
pub mod rating;
pub mod scorer;
pub mod weights;

pub use issues::detect_issues;
pub use rating::Rating;
pub use scorer::{round_to_cents, sustainability_score, ScoreInputs};
pub use weights::WeightTriple;

/// Raised when the scorer is handed a weight triple it cannot use.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("Weights must sum to 1.0")]
    InvalidWeights { sum: f64 },
    #[error("Weights must each be between 0 and 1")]
    WeightOutOfRange { component: &'static str, value: f64 },
}
