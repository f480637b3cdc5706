use crate::analysis::CreditAnalyzer;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::{CreditCheckRequest, CreditCheckResponse};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{Method, StatusCode, Uri},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use uuid::Uuid;

/// Largest request body accepted by the credit routes.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Analyzer wired to the configured pendency lookup service.
    pub analyzer: CreditAnalyzer,
}

/// Builds the full application.
///
/// The credit routes sit behind a 1MB body limit and per-IP rate limiting.
/// `/health` bypasses both so probes keep answering under load.
pub fn app(state: Arc<AppState>, config: &Config) -> anyhow::Result<Router> {
    // tower_governor takes the replenish interval, not a rate
    let replenish_ms = (1000 / config.rate_limit_per_second).max(1);
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_ms)
            .burst_size(config.rate_limit_burst)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?,
    );

    let protected_routes = Router::new()
        .route(
            "/api/v1/credit/:cpf",
            get(get_credit_status).fallback(method_not_allowed),
        )
        .route(
            "/api/v1/credit/check",
            post(check_credit).fallback(method_not_allowed),
        )
        .layer(
            ServiceBuilder::new()
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
                .layer(GovernorLayer {
                    config: governor_conf,
                }),
        );

    Ok(Router::new()
        .route("/health", get(health))
        .merge(protected_routes)
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()))
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// GET /api/v1/credit/:cpf
///
/// Every analysis outcome, including invalid input, is a 200 response whose
/// `status` field carries the result.
pub async fn get_credit_status(
    State(state): State<Arc<AppState>>,
    Path(cpf): Path<String>,
) -> Json<CreditCheckResponse> {
    tracing::info!("GET /api/v1/credit/{}", cpf);
    Json(run_check(&state.analyzer, cpf))
}

/// POST /api/v1/credit/check
///
/// # Returns
///
/// * `Result<Json<CreditCheckResponse>, AppError>` - The analysis result, or
///   `400` when the body is not a JSON object with a string `cpf` field.
pub async fn check_credit(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreditCheckRequest>, JsonRejection>,
) -> Result<Json<CreditCheckResponse>, AppError> {
    let Json(request) = payload?;
    tracing::info!("POST /api/v1/credit/check - cpf: {}", request.cpf);
    Ok(Json(run_check(&state.analyzer, request.cpf)))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} not allowed on {}", method, uri.path()))
}

fn run_check(analyzer: &CreditAnalyzer, cpf: String) -> CreditCheckResponse {
    let check_id = Uuid::new_v4();
    let span = tracing::info_span!("credit_check", %check_id);
    let _guard = span.enter();

    let status = analyzer.check_cpf_status(&cpf);

    CreditCheckResponse {
        check_id,
        cpf,
        status,
        checked_at: chrono::Utc::now(),
    }
}
