//! Reservations API (read-only)

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use shared::models::Reservation;
use shared::{ErrorCode, ListQuery, PaginatedResponse};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/reservations", get(list))
        .route("/api/reservations/{id}", get(get_by_id))
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<PaginatedResponse<Reservation>>> {
    let reservations = state.reservations.list().await?;
    Ok(Json(query.apply(&reservations)))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Reservation>> {
    state.reservations.get(id).await?.map(Json).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::ReservationNotFound,
            format!("Reservation {id} not found"),
        )
    })
}
