//! Data models
//!
//! Shared between bistro-server (store, REST API) and bistro-console (pages).
//! All IDs are `i64`, assigned by the store as max existing id + 1.

pub mod inventory;
pub mod menu_item;
pub mod order;
pub mod report;
pub mod reservation;
pub mod staff;

// Re-exports
pub use inventory::*;
pub use menu_item::*;
pub use order::*;
pub use report::*;
pub use reservation::*;
pub use staff::*;
