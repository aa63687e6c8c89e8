//! Health check and greeting handlers.

use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::AppState;

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is healthy", body = Object)
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Greeting endpoint.
#[utoipa::path(
    post,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Fixed greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn welcome(State(state): State<Arc<AppState>>) -> String {
    state.greeting.clone()
}
