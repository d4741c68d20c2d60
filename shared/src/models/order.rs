//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Preparing => "Preparing",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Cancelled orders do not count towards revenue
    pub fn counts_as_revenue(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Customer order (read-only in the back office)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer: String,
    /// Number of line items
    pub items: u32,
    pub total: Decimal,
    pub status: OrderStatus,
}
