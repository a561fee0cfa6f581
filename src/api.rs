//! Unified API router
//!
//! Merges the root service descriptor, health probe, and strings router
//! into a single axum `Router` with CORS and request tracing.
//!
//! ## Endpoint Map
//!
//! | Path                                      | Description                  |
//! |-------------------------------------------|------------------------------|
//! | `GET /`                                   | Service descriptor           |
//! | `GET /health`                             | Liveness probe               |
//! | `POST /strings`                           | Analyze and store a string   |
//! | `GET /strings`                            | List with structured filters |
//! | `GET /strings/:value`                     | Retrieve by exact value      |
//! | `GET /strings/filter-by-natural-language` | List via interpreted query   |
//! | `DELETE /strings/:value`                  | Delete by exact value        |

use crate::strings::{strings_router, StringsState};
use axum::{
    http::{header, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the complete HTTP application
///
/// Returns a single `Router` ready to be served by `axum::serve`.
pub fn build_app(strings_state: StringsState, cors_origins: &[String]) -> Router {
    let cors = build_cors(cors_origins);

    Router::new()
        .route("/", get(service_descriptor))
        .route("/health", get(health_check))
        .merge(strings_router(strings_state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

// =============================================================================
// Root handlers
// =============================================================================

#[derive(Serialize)]
struct ServiceDescriptor {
    message: String,
    status: String,
    version: String,
    endpoints: Vec<String>,
}

async fn service_descriptor() -> impl IntoResponse {
    Json(ServiceDescriptor {
        message: "String Analyzer Service API".to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "POST /strings".to_string(),
            "GET /strings/:value".to_string(),
            "GET /strings".to_string(),
            "GET /strings/filter-by-natural-language".to_string(),
            "DELETE /strings/:value".to_string(),
        ],
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// CORS
// =============================================================================

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(parsed)
    }
}
