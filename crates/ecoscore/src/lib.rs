//! Sustainability scoring for consumer products.
//!
//! Products are scored with a weighted formula over emissions, circularity, and
//! cost, graded into letter bands, checked for common sustainability issues, and
//! enriched with improvement suggestions from an external text-generation service.
//! Every scored product is kept in a [`submissions::SubmissionStore`] so that
//! history and aggregate reports can be served over HTTP.

pub mod config;
pub mod error;
pub mod router;
pub mod scoring;
pub mod service;
pub mod submissions;
pub mod suggestions;
pub mod telemetry;

pub use router::scoring_router;
pub use service::{ScoringService, ScoringServiceError};
