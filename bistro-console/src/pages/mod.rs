//! Pages
//!
//! | Page | Route | Kind |
//! |------|-------|------|
//! | [`DashboardPage`] | `/` | stats and charts |
//! | [`StaffPage`] | `/staff` | CRUD |
//! | [`MenuPage`] | `/menu` | CRUD + category filter + availability toggle |
//! | [`OrdersPage`] | `/orders` | read-only table |
//! | [`ReservationsPage`] | `/reservations` | read-only table |
//! | [`InventoryPage`] | `/inventory` | read-only table |
//! | [`ReportsPage`] | `/reports` | charts |
//! | [`LoginPage`] | `/login` | form |

pub mod crud;
pub mod dashboard;
pub mod list;
pub mod login;
pub mod menu;
pub mod staff;

pub use crud::{CrudPage, DynService, Modal, Resource};
pub use dashboard::{DashboardPage, ReportsPage};
pub use list::{InventoryPage, ListPage, Listing, OrdersPage, ReservationsPage};
pub use login::{LoginField, LoginPage};
pub use menu::MenuPage;
pub use staff::StaffPage;

use shared::models::{Department, OrderStatus, ReservationStatus, StockStatus};
use shared::table::BadgeTone;

pub fn department_tone(department: Department) -> BadgeTone {
    match department {
        Department::Management => BadgeTone::Info,
        Department::Kitchen => BadgeTone::Warning,
        Department::Service => BadgeTone::Success,
        Department::Cleaning | Department::Delivery => BadgeTone::Neutral,
    }
}

pub fn order_tone(status: OrderStatus) -> BadgeTone {
    match status {
        OrderStatus::Pending => BadgeTone::Warning,
        OrderStatus::Preparing => BadgeTone::Info,
        OrderStatus::Completed => BadgeTone::Success,
        OrderStatus::Cancelled => BadgeTone::Danger,
    }
}

pub fn reservation_tone(status: ReservationStatus) -> BadgeTone {
    match status {
        ReservationStatus::Confirmed => BadgeTone::Success,
        ReservationStatus::Pending => BadgeTone::Warning,
        ReservationStatus::Cancelled => BadgeTone::Danger,
    }
}

pub fn stock_tone(status: StockStatus) -> BadgeTone {
    match status {
        StockStatus::InStock => BadgeTone::Success,
        StockStatus::LowStock => BadgeTone::Warning,
        StockStatus::OutOfStock => BadgeTone::Danger,
    }
}
