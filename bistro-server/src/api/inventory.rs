//! Inventory API (read-only)

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use shared::models::InventoryItem;
use shared::{ErrorCode, ListQuery, PaginatedResponse};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/inventory", get(list))
        .route("/api/inventory/{id}", get(get_by_id))
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<PaginatedResponse<InventoryItem>>> {
    let items = state.inventory.list().await?;
    Ok(Json(query.apply(&items)))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<InventoryItem>> {
    state.inventory.get(id).await?.map(Json).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::InventoryItemNotFound,
            format!("Inventory item {id} not found"),
        )
    })
}
