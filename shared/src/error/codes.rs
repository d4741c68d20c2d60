//! Unified error codes for the back office
//!
//! Error codes are shared by the REST server and the console.
//! They are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 5xxx: Inventory errors
//! - 6xxx: Menu errors
//! - 7xxx: Reservation errors
//! - 8xxx: Staff errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Required field missing
    RequiredField = 7,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,

    // ==================== 5xxx: Inventory ====================
    /// Inventory item not found
    InventoryItemNotFound = 5001,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Menu item has invalid price
    MenuItemInvalidPrice = 6002,
    /// Menu item has invalid preparation time
    MenuItemInvalidPreparationTime = 6003,

    // ==================== 7xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 7001,

    // ==================== 8xxx: Staff ====================
    /// Staff member not found
    StaffNotFound = 8001,
    /// Staff member has invalid salary
    StaffInvalidSalary = 8002,
    /// Staff member has invalid date of birth
    StaffInvalidBirthDate = 8003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Data store error
    StoreError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::RequiredField => "Required field is missing",

            // Order
            ErrorCode::OrderNotFound => "Order not found",

            // Inventory
            ErrorCode::InventoryItemNotFound => "Inventory item not found",

            // Menu
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemInvalidPrice => "Menu item price must not be negative",
            ErrorCode::MenuItemInvalidPreparationTime => {
                "Preparation time must be a positive number of minutes"
            }

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",

            // Staff
            ErrorCode::StaffNotFound => "Staff member not found",
            ErrorCode::StaffInvalidSalary => "Salary must not be negative",
            ErrorCode::StaffInvalidBirthDate => "Date of birth is invalid",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StoreError => "Data store error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            7 => Ok(ErrorCode::RequiredField),

            4001 => Ok(ErrorCode::OrderNotFound),
            5001 => Ok(ErrorCode::InventoryItemNotFound),

            // Menu
            6001 => Ok(ErrorCode::MenuItemNotFound),
            6002 => Ok(ErrorCode::MenuItemInvalidPrice),
            6003 => Ok(ErrorCode::MenuItemInvalidPreparationTime),

            7001 => Ok(ErrorCode::ReservationNotFound),

            // Staff
            8001 => Ok(ErrorCode::StaffNotFound),
            8002 => Ok(ErrorCode::StaffInvalidSalary),
            8003 => Ok(ErrorCode::StaffInvalidBirthDate),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StoreError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
