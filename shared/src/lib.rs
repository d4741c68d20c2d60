//! Shared types for the bistro back office
//!
//! Data models, the unified error system, the generic data table and list
//! query types used by both bistro-server and bistro-console.

pub mod error;
pub mod models;
pub mod query;
pub mod table;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use query::{ListQuery, PaginatedResponse};
pub use serde::{Deserialize, Serialize};
