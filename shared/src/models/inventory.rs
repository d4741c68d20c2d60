//! Inventory Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock level status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inventory line (read-only in the back office)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub item: String,
    pub quantity: Decimal,
    pub unit: String,
    pub status: StockStatus,
}

impl InventoryItem {
    /// Quantity with its unit, e.g. `50 kg`
    pub fn quantity_label(&self) -> String {
        format!("{} {}", self.quantity.normalize(), self.unit)
    }
}
