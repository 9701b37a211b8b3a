//! strand-api - HTTP API server for strand
//!
//! The router is built here so integration tests can drive it in-process;
//! `main.rs` only wires configuration, logging and the listener.

pub mod config;
pub mod handlers;
pub mod query_types;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use uuid::Uuid;

use strand_core::{defaults, StringRepository};

use crate::config::ServerConfig;
use crate::handlers::strings;

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Record store; any `StringRepository` backend can be injected.
    pub store: Arc<dyn StringRepository>,
}

impl AppState {
    pub fn new(store: Arc<dyn StringRepository>) -> Self {
        Self { store }
    }
}

// =============================================================================
// OPENAPI
// =============================================================================

/// OpenAPI document, served at `/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Strand String Analyzer API",
        description = "Analyze, store and filter strings, including natural-language filtering"
    ),
    paths(
        strings::create_string,
        strings::list_strings,
        strings::filter_by_natural_language,
        strings::get_string,
        strings::delete_string,
    ),
    components(schemas(
        strand_core::StringRecord,
        strand_core::AnalysisProperties,
        strand_core::CreateStringRequest,
        strand_core::FilterSet,
        strand_query::InterpretedQuery,
        strings::ListStringsResponse,
        strings::NaturalLanguageResponse,
    )),
    tags((name = "Strings", description = "String analysis and filtering"))
)]
pub struct ApiDoc;

// =============================================================================
// ROUTER
// =============================================================================

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/openapi.json", get(openapi_json))
        .route(
            "/strings",
            get(strings::list_strings).post(strings::create_string),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(strings::filter_by_natural_language),
        )
        .route(
            "/strings/:value",
            get(strings::get_string).delete(strings::delete_string),
        )
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(config.allowed_origins.clone()))
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_credentials(true)
                .max_age(std::time::Duration::from_secs(
                    defaults::CORS_MAX_AGE_SECS,
                )),
        )
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": defaults::ROOT_MESSAGE,
    }))
}

async fn health_check(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let records = state.store.count().await?;
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "records": records,
    })))
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    /// Extractor rejection, keeping the status axum chose.
    Rejected(StatusCode, String),
    Internal(String),
}

impl From<strand_core::Error> for ApiError {
    fn from(err: strand_core::Error) -> Self {
        use strand_core::Error;

        match err {
            Error::Conflict(msg) => ApiError::Conflict(msg),
            Error::NotFound(msg) | Error::NoMatch(msg) => ApiError::NotFound(msg),
            Error::Unparseable(msg) | Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            Error::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Rejected(status, msg) => (status, msg),
            ApiError::Internal(msg) => {
                tracing::error!(subsystem = "api", error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
