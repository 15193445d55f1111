use ecoscore::config::AppConfig;
use ecoscore::submissions::InMemorySubmissionStore;
use ecoscore::suggestions::{SuggestionBackend, SuggestionProvider};
use ecoscore::ScoringService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type AppScoringService = ScoringService<InMemorySubmissionStore, SuggestionBackend>;

/// Wires a fresh in-memory store and the configured suggestion backend.
pub(crate) fn build_service(config: &AppConfig, backend: SuggestionBackend) -> AppScoringService {
    let store = Arc::new(InMemorySubmissionStore::default());
    let suggestions = SuggestionProvider::new(backend, config.suggestions.max_tokens);
    ScoringService::new(store, suggestions, config.scoring)
}
