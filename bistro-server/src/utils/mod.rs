//! Utility module - logging and clock
//!
//! Error types come from `shared::error` and are re-exported here for handlers.

pub mod logger;
pub mod time;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
