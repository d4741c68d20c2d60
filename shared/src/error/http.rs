//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::OrderNotFound
            | Self::InventoryItemNotFound
            | Self::MenuItemNotFound
            | Self::ReservationNotFound
            | Self::StaffNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            Self::Unknown | Self::InternalError | Self::StoreError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
