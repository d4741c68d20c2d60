//! Staff API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{StaffForm, StaffMember};
use shared::{ErrorCode, ListQuery, PaginatedResponse};
use validator::Validate;

use crate::core::ServerState;
use crate::services::CrudService;
use crate::utils::{AppError, AppResult};

/// List staff, optionally filtered by `search` and paged by `page`
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<PaginatedResponse<StaffMember>>> {
    let staff = state.staff.list().await?;
    Ok(Json(query.apply(&staff)))
}

/// Get staff member by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<StaffMember>> {
    let staff = state.staff.get(id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::StaffNotFound, format!("Staff member {id} not found"))
            .with_detail("id", id)
    })?;
    Ok(Json(staff))
}

/// Create a staff member
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StaffForm>,
) -> AppResult<Json<StaffMember>> {
    payload.validate()?;
    let staff = state.staff.create(payload).await?;
    Ok(Json(staff))
}

/// Replace a staff member
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StaffForm>,
) -> AppResult<Json<StaffMember>> {
    payload.validate()?;
    let staff = state.staff.update(id, payload).await?;
    Ok(Json(staff))
}

/// Delete a staff member; `false` when the id did not exist
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let removed = state.staff.delete(id).await?;
    Ok(Json(removed))
}
