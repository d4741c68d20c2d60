//! Resource services
//!
//! Async operations over the repositories, each preceded by a simulated
//! backend delay. Validation is not done here; forms are validated at the
//! REST boundary and in the console.
//!
//! | Service | Resource |
//! |---------|----------|
//! | [`StaffService`] | staff members (CRUD) |
//! | [`MenuService`] | menu items (CRUD) |
//! | [`ReadOnlyService`] | orders, reservations, inventory |
//! | [`DashboardService`] | dashboard stats and report series |

pub mod dashboard_service;
pub mod latency;
pub mod menu_service;
pub mod read_only_service;
pub mod staff_service;

pub use dashboard_service::DashboardService;
pub use latency::{Latency, Operation};
pub use menu_service::MenuService;
pub use read_only_service::{InventoryService, OrderService, ReadOnlyService, ReservationService};
pub use staff_service::StaffService;

use async_trait::async_trait;
use shared::error::AppResult;

/// CRUD contract shared by the staff and menu services.
///
/// Object safe, so pages can hold `Arc<dyn CrudService<..>>` and tests can
/// swap in failing implementations.
#[async_trait]
pub trait CrudService: Send + Sync {
    type Record: Clone + Send + Sync + 'static;
    type Form: Send + 'static;

    async fn list(&self) -> AppResult<Vec<Self::Record>>;
    /// `Ok(None)` when no record has `id`
    async fn get(&self, id: i64) -> AppResult<Option<Self::Record>>;
    async fn create(&self, form: Self::Form) -> AppResult<Self::Record>;
    /// Updating a missing id changes nothing and echoes the record built
    /// from `form` with that id
    async fn update(&self, id: i64, form: Self::Form) -> AppResult<Self::Record>;
    /// Removing a missing id is a no-op returning `Ok(false)`
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
