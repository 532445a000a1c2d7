//! HTTP API.
//!
//! JSON endpoints under `/api`. Request bodies that cannot be parsed are
//! answered with `{"success": false, "error": ...}` and a 400 status, form
//! values that parse but cannot be used with a 422; the chatbot itself
//! never fails.

use crate::care::{CareDirectory, CareRequest};
use crate::catalog::Catalog;
use crate::investment::{InvestmentForm, Segmenter};
use crate::matcher::{Explanation, IntentMatcher};
use crate::metrics::{ChatMetrics, MetricsReport};
use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Errors returned to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unprocessable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!("Rejected request ({}): {}", status, self);
        (
            status,
            Json(json!({
                "success": false,
                "error": self.to_string(),
            })),
        )
            .into_response()
    }
}

/// Shared state of all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: IntentMatcher,
    pub metrics: Arc<ChatMetrics>,
    pub care: Arc<CareDirectory>,
    pub segmenter: Arc<Segmenter>,
    /// Allowed CORS origins; empty allows any origin
    pub cors_origins: Vec<String>,
}

impl AppState {
    pub fn new(catalog: Catalog, matcher: IntentMatcher) -> Self {
        Self {
            catalog: Arc::new(catalog),
            matcher,
            metrics: Arc::new(ChatMetrics::new()),
            care: Arc::new(CareDirectory::default()),
            segmenter: Arc::new(Segmenter::default()),
            cors_origins: Vec::new(),
        }
    }

    pub fn with_care(mut self, care: CareDirectory) -> Self {
        self.care = Arc::new(care);
        self
    }

    pub fn with_segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = Arc::new(segmenter);
        self
    }

    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }
}

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state.cors_origins);

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/chat", post(chat))
        .route("/api/chat/explain", post(chat_explain))
        .route("/api/languages", get(list_languages))
        .route("/api/metrics", get(metrics))
        .route("/api/recommend", post(care_recommend))
        .route("/api/care-recommend", post(care_recommend))
        .route("/api/investment-recommend", post(investment_recommend))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed.is_empty() {
        warn!("All configured CORS origins are invalid, allowing any origin");
        return CorsLayer::permissive();
    }

    info!("CORS configured with {} origins", parsed.len());
    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Bind and serve until Ctrl+C.
pub async fn serve(state: AppState, address: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Listening on {}", address);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

// ==================== Chat ====================

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
    #[serde(default)]
    language: Option<String>,
}

#[derive(Debug, Serialize)]
struct ExplainResponse {
    success: bool,
    #[serde(flatten)]
    explanation: Explanation,
}

fn chat_request(
    state: &AppState,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<ChatRequest, ApiError> {
    payload.map(|Json(request)| request).map_err(|rejection| {
        state.metrics.record_rejected();
        ApiError::from(rejection)
    })
}

fn answer(state: &AppState, request: &ChatRequest) -> Explanation {
    let explanation = state
        .matcher
        .explain(&state.catalog, &request.message, request.language.as_deref());

    state.metrics.record(explanation.stage);
    debug!(
        "Chat [{}] stage={} intent={}",
        explanation.language,
        explanation.stage.map(|s| s.as_str()).unwrap_or("fallback"),
        explanation.intent.as_deref().unwrap_or("-")
    );
    explanation
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request = chat_request(&state, payload)?;
    let explanation = answer(&state, &request);

    Ok(Json(json!({
        "success": true,
        "response": explanation.response,
    })))
}

async fn chat_explain(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ExplainResponse>, ApiError> {
    let request = chat_request(&state, payload)?;

    Ok(Json(ExplainResponse {
        success: true,
        explanation: answer(&state, &request),
    }))
}

// ==================== Info ====================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let languages: Vec<&str> = state.catalog.languages().iter().map(|l| l.language().code()).collect();

    Json(json!({
        "status": "ok",
        "message": "Backend is running",
        "version": env!("CARGO_PKG_VERSION"),
        "intents": state.catalog.intent_count(),
        "languages": languages,
    }))
}

async fn list_languages(State(state): State<AppState>) -> impl IntoResponse {
    let languages: Vec<serde_json::Value> = state
        .catalog
        .languages()
        .iter()
        .map(|tables| {
            let language = tables.language();
            json!({
                "code": language.code(),
                "name": language.name(),
                "nativeName": language.native_name(),
                "intents": tables.intents().len(),
            })
        })
        .collect();

    Json(json!({
        "success": true,
        "default": state.catalog.default_language(),
        "languages": languages,
    }))
}

async fn metrics(State(state): State<AppState>) -> Json<MetricsReport> {
    Json(state.metrics.report())
}

// ==================== Recommendations ====================

async fn care_recommend(
    State(state): State<AppState>,
    payload: Result<Json<CareRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(request) = payload?;
    let recommendations = state.care.recommend(&request);

    Ok(Json(json!({
        "success": true,
        "recommendations": recommendations,
    })))
}

async fn investment_recommend(
    State(state): State<AppState>,
    payload: Result<Json<InvestmentForm>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(form) = payload?;
    let request = form
        .into_request()
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    let recommendations = state.segmenter.recommend(&request);
    Ok(Json(json!({
        "success": true,
        "recommendations": recommendations,
    })))
}
