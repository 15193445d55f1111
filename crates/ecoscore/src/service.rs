use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::config::ScoringConfig;
use crate::scoring::{detect_issues, sustainability_score, Rating, ScoringError, WeightTriple};
use crate::submissions::{
    summarize, ScoreRequest, ScoreResult, ScoreSummary, StoreError, SubmissionRecord,
    SubmissionStore, ValidationError,
};
use crate::suggestions::{SuggestionProvider, TextGenerator};

/// Service composing the scorer, issue detector, suggestion provider, and
/// submission store behind the HTTP endpoints.
pub struct ScoringService<S, G> {
    store: Arc<S>,
    suggestions: SuggestionProvider<G>,
    default_weights: WeightTriple,
}

impl<S, G> ScoringService<S, G>
where
    S: SubmissionStore + 'static,
    G: TextGenerator + 'static,
{
    pub fn new(store: Arc<S>, suggestions: SuggestionProvider<G>, config: ScoringConfig) -> Self {
        Self {
            store,
            suggestions,
            default_weights: config.default_weights,
        }
    }

    pub fn default_weights(&self) -> WeightTriple {
        self.default_weights
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Scores one product, records the submission, and returns the composite result.
    ///
    /// Weights are validated before the external suggestion call so an invalid
    /// request never reaches the provider.
    pub async fn score(&self, request: ScoreRequest) -> Result<ScoreResult, ScoringServiceError> {
        let (product, weights) = request.into_parts();
        let weights = weights.unwrap_or(self.default_weights);

        let score = sustainability_score(product.score_inputs(), &weights)?;
        let rating = Rating::from_score(score);
        let suggestions = self.suggestions.suggest(&product, score, rating).await;
        let issues = detect_issues(&product.materials, &product.transport, &product.packaging);

        let record = SubmissionRecord {
            product,
            score,
            rating,
            suggestions: suggestions.items,
            issues,
            timestamp: Utc::now(),
            weights_used: weights,
        };
        let result = record.result();
        self.store.append(record)?;

        info!(
            product = %result.product_name,
            score = result.sustainability_score,
            %rating,
            suggestion_source = ?suggestions.source,
            "scored product"
        );

        Ok(result)
    }

    /// Every submission, newest first. Equal timestamps keep insertion order.
    pub fn history(&self) -> Result<Vec<SubmissionRecord>, ScoringServiceError> {
        let mut records = self.store.all()?;
        records.sort_by(|left, right| right.timestamp.cmp(&left.timestamp));
        Ok(records)
    }

    pub fn summary(&self) -> Result<ScoreSummary, ScoringServiceError> {
        let records = self.store.all()?;
        Ok(summarize(&records))
    }

    pub fn clear(&self) -> Result<usize, ScoringServiceError> {
        let cleared = self.store.clear()?;
        info!(cleared, "cleared submission store");
        Ok(cleared)
    }
}

/// Error raised by the scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ScoringServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ScoringError> for ScoringServiceError {
    fn from(value: ScoringError) -> Self {
        Self::Validation(ValidationError::Weights(value))
    }
}
