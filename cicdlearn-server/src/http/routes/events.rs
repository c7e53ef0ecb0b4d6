//! Event endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::QueryParams;
use crate::http::server::AppState;
use crate::models::Event;

/// GET /events - most recent events, newest first
async fn list_events(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.events.list_recent().await?;
    Ok(Json(events))
}

/// POST /events?message=... - insert one event document
async fn create_event(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<Json<Event>, ApiError> {
    let event = state.events.create(params.required("message")?).await?;
    tracing::debug!(id = %event.id, "event created");
    Ok(Json(event))
}

/// Event routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/events", get(list_events).post(create_event))
}
