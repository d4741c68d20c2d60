//! Dashboard and reports API

use axum::{Json, Router, extract::State, routing::get};
use shared::models::{DashboardData, ReportData};

use crate::core::ServerState;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/dashboard", get(dashboard))
        .route("/api/reports", get(reports))
}

pub async fn dashboard(State(state): State<ServerState>) -> AppResult<Json<DashboardData>> {
    Ok(Json(state.dashboard.dashboard().await?))
}

pub async fn reports(State(state): State<ServerState>) -> AppResult<Json<ReportData>> {
    Ok(Json(state.dashboard.reports().await?))
}
