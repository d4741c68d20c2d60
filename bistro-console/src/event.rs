//! Completions of spawned service calls, delivered back to the UI loop

use shared::AppResult;
use shared::models::{
    DashboardData, InventoryItem, MenuItem, Order, ReportData, Reservation, StaffMember,
};
use tokio::sync::mpsc;

pub type EventSender = mpsc::UnboundedSender<PageEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<PageEvent>;

/// Outcome of one CRUD call
#[derive(Debug)]
pub enum CrudEvent<R> {
    Loaded(AppResult<Vec<R>>),
    Created(AppResult<R>),
    Updated(AppResult<R>),
    Deleted(i64, AppResult<bool>),
}

#[derive(Debug)]
pub enum PageEvent {
    Staff(CrudEvent<StaffMember>),
    Menu(CrudEvent<MenuItem>),
    /// Optimistic availability flip; `previous` is restored on failure
    AvailabilityToggled {
        id: i64,
        previous: bool,
        result: AppResult<MenuItem>,
    },
    Orders(AppResult<Vec<Order>>),
    Reservations(AppResult<Vec<Reservation>>),
    Inventory(AppResult<Vec<InventoryItem>>),
    Dashboard(AppResult<DashboardData>),
    Reports(AppResult<ReportData>),
}

pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
