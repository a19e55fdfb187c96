//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::responses::{
    DeleteAllResponse, HealthResponse, TimerDetailResponse, TimerListResponse, TimerResponse,
};
use super::validate::validate_timer_payload;
use crate::{
    error::ApiError,
    state::{AppState, StatusFilter, TimerId},
};

/// Query parameters accepted by the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub active: Option<bool>,
}

/// The path id never reaches the store unparsed: an id that does not parse
/// as an integer can never have been issued, so it reports as NotFound.
fn parse_id(raw: &str) -> Result<TimerId, ApiError> {
    raw.parse().map_err(|_| ApiError::timer_not_found(raw))
}

/// A body that failed to arrive as JSON is an unexpected fault, not a
/// validation outcome; the parse detail stays in the log.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    let Json(body) =
        body.map_err(|e| ApiError::Internal(format!("Failed to read request body: {e}")))?;
    Ok(body)
}

/// Handle GET /api/timers - List timers, optionally filtered by status
pub async fn list_timers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<TimerListResponse>, ApiError> {
    let filter = StatusFilter::from_query(query.active);
    let timers = state.store.list(filter)?;
    Ok(Json(TimerListResponse::new(timers)))
}

/// Handle GET /api/timers/:id - Look up a single timer with remaining time
pub async fn get_timer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TimerDetailResponse>, ApiError> {
    let id = parse_id(&id)?;
    let detail = state.store.get(id)?;
    Ok(Json(TimerDetailResponse::new(detail)))
}

/// Handle POST /api/timers - Create a new timer
pub async fn create_timer(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<TimerResponse>), ApiError> {
    let body = json_body(body)?;
    let payload = validate_timer_payload(&body)?;

    let timer = state.store.create(&payload.name, payload.duration)?;
    info!("Create endpoint called - timer {} created", timer.id);
    Ok((StatusCode::CREATED, Json(TimerResponse::created(timer))))
}

/// Handle PUT /api/timers/:id - Rewrite a timer, restarting its countdown
pub async fn update_timer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TimerResponse>, ApiError> {
    let id = parse_id(&id)?;
    let body = json_body(body)?;
    let payload = validate_timer_payload(&body)?;

    let timer = state.store.update(id, &payload.name, payload.duration)?;
    info!("Update endpoint called - timer {} rewritten", id);
    Ok(Json(TimerResponse::updated(timer)))
}

/// Handle DELETE /api/timers/:id - Remove a single timer
pub async fn delete_timer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TimerResponse>, ApiError> {
    let id = parse_id(&id)?;
    let timer = state.store.remove(id)?;
    info!("Delete endpoint called - timer {} removed", id);
    Ok(Json(TimerResponse::deleted(timer)))
}

/// Handle DELETE /api/timers - Remove every timer and reset the id sequence
pub async fn delete_all_timers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DeleteAllResponse>, ApiError> {
    let count = state.store.clear()?;
    info!("Delete-all endpoint called - {} timers removed", count);
    Ok(Json(DeleteAllResponse::new(count)))
}

/// Handle GET /api - API info document
pub async fn api_info() -> Json<Value> {
    Json(json!({
        "name": "Countdown Timer API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "API for managing countdown timers",
        "endpoints": {
            "GET /api/timers": "Get all timers (supports ?active=true/false)",
            "GET /api/timers/:id": "Get timer by ID",
            "POST /api/timers": "Create new timer (requires name and duration)",
            "PUT /api/timers/:id": "Update timer",
            "DELETE /api/timers/:id": "Delete timer",
            "DELETE /api/timers": "Delete all timers",
        },
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.uptime()))
}
