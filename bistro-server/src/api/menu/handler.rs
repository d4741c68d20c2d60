//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{MenuCategory, MenuItem, MenuItemForm};
use shared::{ErrorCode, ListQuery, PaginatedResponse};
use validator::Validate;

use crate::core::ServerState;
use crate::services::CrudService;
use crate::utils::{AppError, AppResult};

/// `?search=..&page=..&category=..`
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub category: Option<MenuCategory>,
}

impl MenuQuery {
    fn list_query(&self) -> ListQuery {
        ListQuery {
            search: self.search.clone(),
            page: self.page,
        }
    }
}

/// List menu items, optionally restricted to one category before searching
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<PaginatedResponse<MenuItem>>> {
    let mut items = state.menu.list().await?;
    if let Some(category) = query.category {
        items.retain(|item| item.category == category);
    }
    Ok(Json(query.list_query().apply(&items)))
}

/// Get menu item by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuItem>> {
    let item = state.menu.get(id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::MenuItemNotFound, format!("Menu item {id} not found"))
            .with_detail("id", id)
    })?;
    Ok(Json(item))
}

/// Create a menu item
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemForm>,
) -> AppResult<Json<MenuItem>> {
    payload.validate()?;
    let item = state.menu.create(payload).await?;
    Ok(Json(item))
}

/// Replace a menu item
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuItemForm>,
) -> AppResult<Json<MenuItem>> {
    payload.validate()?;
    let item = state.menu.update(id, payload).await?;
    Ok(Json(item))
}

/// Delete a menu item; `false` when the id did not exist
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let removed = state.menu.delete(id).await?;
    Ok(Json(removed))
}
