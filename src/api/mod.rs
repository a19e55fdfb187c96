//! HTTP API module
//!
//! Endpoint handlers, response structures, payload validation, and the
//! router that ties them together.

pub mod handlers;
pub mod responses;
pub mod validate;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Anything the router does not know is a boundary-level NotFound, in the
/// same envelope as every other failure.
async fn endpoint_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": "Endpoint not found",
        })),
    )
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api", get(api_info))
        .route(
            "/api/timers",
            get(list_timers).post(create_timer).delete(delete_all_timers),
        )
        .route(
            "/api/timers/:id",
            get(get_timer).put(update_timer).delete(delete_timer),
        )
        .route("/health", get(health))
        .fallback(endpoint_not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
