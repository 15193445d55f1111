use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;

use crate::service::{ScoringService, ScoringServiceError};
use crate::submissions::{
    ScoreRequest, ScoreSummary, SubmissionRecord, SubmissionStore, ValidationError,
};
use crate::suggestions::TextGenerator;

#[derive(Debug, Serialize)]
pub struct HistoryView {
    pub success: bool,
    pub count: usize,
    pub submissions: Vec<SubmissionRecord>,
}

#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub success: bool,
    #[serde(flatten)]
    pub summary: ScoreSummary,
}

/// Router builder exposing the scoring, history, summary, and clear endpoints.
pub fn scoring_router<S, G>(service: Arc<ScoringService<S, G>>) -> Router
where
    S: SubmissionStore + 'static,
    G: TextGenerator + 'static,
{
    Router::new()
        .route("/score", post(score_handler::<S, G>))
        .route("/history", get(history_handler::<S, G>))
        .route("/score-summary", get(summary_handler::<S, G>))
        .route("/clear", post(clear_handler::<S, G>))
        .with_state(service)
}

pub(crate) async fn score_handler<S, G>(
    State(service): State<Arc<ScoringService<S, G>>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response
where
    S: SubmissionStore + 'static,
    G: TextGenerator + 'static,
{
    let request = match payload
        .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))
        .and_then(|Json(body)| ScoreRequest::from_json(body))
    {
        Ok(request) => request,
        Err(validation) => return failure_response(validation.into()),
    };

    match service.score(request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => failure_response(err),
    }
}

pub(crate) async fn history_handler<S, G>(
    State(service): State<Arc<ScoringService<S, G>>>,
) -> Response
where
    S: SubmissionStore + 'static,
    G: TextGenerator + 'static,
{
    match service.history() {
        Ok(submissions) => {
            let view = HistoryView {
                success: true,
                count: submissions.len(),
                submissions,
            };
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(err) => failure_response(err),
    }
}

pub(crate) async fn summary_handler<S, G>(
    State(service): State<Arc<ScoringService<S, G>>>,
) -> Response
where
    S: SubmissionStore + 'static,
    G: TextGenerator + 'static,
{
    match service.summary() {
        Ok(summary) => {
            let view = SummaryView {
                success: true,
                summary,
            };
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(err) => failure_response(err),
    }
}

pub(crate) async fn clear_handler<S, G>(
    State(service): State<Arc<ScoringService<S, G>>>,
) -> Response
where
    S: SubmissionStore + 'static,
    G: TextGenerator + 'static,
{
    match service.clear() {
        Ok(cleared) => {
            let payload = json!({
                "success": true,
                "message": "All data cleared",
                "cleared": cleared,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => failure_response(err),
    }
}

fn failure_response(err: ScoringServiceError) -> Response {
    let (status, message) = match &err {
        ScoringServiceError::Validation(validation) => {
            (StatusCode::BAD_REQUEST, validation.to_string())
        }
        ScoringServiceError::Store(store) => {
            error!(error = %store, "submission store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal error: {store}"),
            )
        }
    };

    let payload = json!({
        "success": false,
        "error": message,
    });
    (status, Json(payload)).into_response()
}
