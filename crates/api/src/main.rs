mod config;
mod error;
mod metrics;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use flows::{
    AnswerUserQuestionOutput, CompareToStandards, CompareToStandardsInput, LanguageModel,
    NegotiationSuggestion, OllamaClient, SimulateScenarioOutput, StandardsComparison,
    SuggestNegotiations, SuggestNegotiationsInput, SummarizeClause, SummarizeClauseInput,
    SummarizeClauseOutput,
};
use serde::{Deserialize, Serialize};
use session::{DocumentExtractor, Orchestrator, SessionView, UploadRequest};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::metrics::{Metrics, MetricsSnapshot, TimedOperation};

#[derive(Clone)]
struct AppState {
    orchestrator: Arc<Orchestrator>,
    summarize: SummarizeClause,
    standards: CompareToStandards,
    negotiations: SuggestNegotiations,
    metrics: Arc<Metrics>,
    provider_base_url: String,
}

#[derive(Deserialize)]
struct QuestionRequest {
    question: String,
}

#[derive(Deserialize)]
struct ScenarioRequest {
    scenario: String,
}

#[derive(Serialize)]
struct HealthResponse {
    model_provider: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let retry = config.retry_policy();

    // One shared client, constructed here and passed in; no ambient global.
    let model: Arc<dyn LanguageModel> = Arc::new(OllamaClient::new(
        config.provider.base_url.clone(),
        config.provider.model.clone(),
        config.provider.api_key.clone(),
    ));

    let orchestrator = Arc::new(Orchestrator::new(
        Arc::new(DocumentExtractor),
        model.clone(),
        retry.clone(),
    ));

    let state = AppState {
        orchestrator,
        summarize: SummarizeClause::new(model.clone(), retry.clone()),
        standards: CompareToStandards::new(model.clone(), retry.clone()),
        negotiations: SuggestNegotiations::new(model, retry),
        metrics: Metrics::new(),
        provider_base_url: config.provider.base_url.clone(),
    };

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_snapshot))
        .route("/api/analyze", post(analyze_document))
        .route("/api/session", get(session_view))
        .route("/api/reset", post(reset_session))
        .route("/api/question", post(ask_question))
        .route("/api/scenario", post(simulate_scenario))
        .route("/api/clauses/summarize", post(summarize_clause))
        .route("/api/clauses/standards", post(compare_to_standards))
        .route("/api/clauses/negotiations", post(suggest_negotiations))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!(addr = %config.server.bind_addr, "server listening");

    axum::serve(listener, app).await.expect("Server error");
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model_provider = match reqwest::get(&state.provider_base_url).await {
        Ok(resp) if resp.status().is_success() => "ok".to_string(),
        Ok(resp) => format!("error: status {}", resp.status()),
        Err(e) => format!("error: {e}"),
    };

    Json(HealthResponse { model_provider })
}

async fn metrics_snapshot(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

async fn analyze_document(
    State(state): State<AppState>,
    Json(req): Json<UploadRequest>,
) -> Result<Json<SessionView>, ApiError> {
    let timer = TimedOperation::start();
    let result = state.orchestrator.analyze(req).await;
    state.metrics.record_request(result.is_ok());

    match result {
        Ok(view) => {
            state.metrics.record_analyze(timer.elapsed(), view.clauses.len());
            Ok(Json(view))
        }
        Err(e) => Err(e.into()),
    }
}

async fn session_view(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.orchestrator.view().await)
}

async fn reset_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.orchestrator.reset().await)
}

async fn ask_question(
    State(state): State<AppState>,
    Json(req): Json<QuestionRequest>,
) -> Result<Json<AnswerUserQuestionOutput>, ApiError> {
    let timer = TimedOperation::start();
    let result = state.orchestrator.ask(&req.question).await;
    state.metrics.record_request(result.is_ok());

    match result {
        Ok(output) => {
            state.metrics.record_question(timer.elapsed());
            Ok(Json(output))
        }
        Err(e) => Err(e.into()),
    }
}

async fn simulate_scenario(
    State(state): State<AppState>,
    Json(req): Json<ScenarioRequest>,
) -> Result<Json<SimulateScenarioOutput>, ApiError> {
    let timer = TimedOperation::start();
    let result = state.orchestrator.simulate(&req.scenario).await;
    state.metrics.record_request(result.is_ok());

    match result {
        Ok(output) => {
            state.metrics.record_scenario(timer.elapsed());
            Ok(Json(output))
        }
        Err(e) => Err(e.into()),
    }
}

async fn summarize_clause(
    State(state): State<AppState>,
    Json(input): Json<SummarizeClauseInput>,
) -> Result<Json<SummarizeClauseOutput>, ApiError> {
    let result = state.summarize.run(&input).await;
    state.metrics.record_request(result.is_ok());
    result.map(Json).map_err(Into::into)
}

async fn compare_to_standards(
    State(state): State<AppState>,
    Json(input): Json<CompareToStandardsInput>,
) -> Result<Json<StandardsComparison>, ApiError> {
    let result = state.standards.run(&input).await;
    state.metrics.record_request(result.is_ok());
    result.map(Json).map_err(Into::into)
}

async fn suggest_negotiations(
    State(state): State<AppState>,
    Json(input): Json<SuggestNegotiationsInput>,
) -> Result<Json<NegotiationSuggestion>, ApiError> {
    let result = state.negotiations.run(&input).await;
    state.metrics.record_request(result.is_ok());
    result.map(Json).map_err(Into::into)
}
