//! Item endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::QueryParams;
use crate::http::server::AppState;
use crate::models::Item;

/// GET /items - every item, ascending by id
async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.items.list().await?;
    Ok(Json(items))
}

/// POST /items?name=... - insert one item
async fn create_item(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<Json<Item>, ApiError> {
    let item = state.items.create(params.required("name")?).await?;
    tracing::debug!(id = item.id, "item created");
    Ok(Json(item))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/items", get(list_items).post(create_item))
}
