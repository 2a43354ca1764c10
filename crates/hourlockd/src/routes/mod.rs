//! HTTP route handlers for hourlockd.

use axum::{
    Json, Router,
    http::{HeaderValue, StatusCode},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod auth;
mod health;
mod proof;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        // Health & status
        .route("/health", get(health::health_check))
        .route("/stats", get(health::stats))

        // Authentication protocol
        .route("/register", post(auth::register))
        .route("/challenge", post(auth::issue_challenge))
        .route("/verify", post(auth::verify_token))

        // Client-side proof computation helper
        .route("/derive", post(proof::derive))

        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())

        // Add shared state
        .with_state(state)
}

/// CORS layer from the configured origin list (empty = allow any, dev only)
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Error body matching the `{"detail": ...}` shape clients already expect
#[derive(Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

pub(crate) fn error_response(status: StatusCode, detail: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            detail: detail.to_string(),
        }),
    )
}
