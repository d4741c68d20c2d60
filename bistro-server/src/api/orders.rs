//! Orders API (read-only)

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use shared::models::Order;
use shared::{ErrorCode, ListQuery, PaginatedResponse};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", get(list))
        .route("/api/orders/{id}", get(get_by_id))
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<PaginatedResponse<Order>>> {
    let orders = state.orders.list().await?;
    Ok(Json(query.apply(&orders)))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    state
        .orders
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::with_message(ErrorCode::OrderNotFound, format!("Order {id} not found")))
}
