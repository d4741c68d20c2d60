//! API routes
//!
//! - [`health`] - health check
//! - [`staff`] - staff CRUD
//! - [`menu`] - menu item CRUD
//! - [`orders`] - orders (read-only)
//! - [`reservations`] - reservations (read-only)
//! - [`inventory`] - inventory (read-only)
//! - [`dashboard`] - dashboard summary and reports

pub mod dashboard;
pub mod health;
pub mod inventory;
pub mod menu;
pub mod orders;
pub mod reservations;
pub mod staff;

use axum::Router;
use http::{HeaderName, HeaderValue, StatusCode};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id generator (uuid v4)
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(staff::router())
        .merge(menu::router())
        .merge(orders::router())
        .merge(reservations::router())
        .merge(inventory::router())
        .merge(dashboard::router())
}

/// Build the application with all middleware
///
/// Used by the HTTP server and by router tests
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // ========== Tower HTTP Middleware ==========
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.request_timeout(),
        ))
        .layer(TraceLayer::new_for_http())
        // ========== Request ID ==========
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
