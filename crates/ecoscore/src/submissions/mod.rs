//! Scored product submissions: request parsing, storage, and reporting.

pub(crate) mod coerce;
pub mod domain;
pub mod report;
pub mod request;
pub mod store;

pub use domain::{ProductInput, ScoreResult, SubmissionRecord};
pub use report::{
    summarize, IssueCount, RatingCounts, ScoreDistribution, ScoreRangeCounts, ScoreSummary,
};
pub use request::{ScoreRequest, ValidationError, REQUIRED_FIELDS};
pub use store::{InMemorySubmissionStore, StoreError, SubmissionStore};
