//! Read-only table pages: orders, reservations, inventory

use bistro_server::services::ReadOnlyService;
use bistro_server::db::Record;
use serde::Serialize;
use shared::AppResult;
use shared::models::{InventoryItem, Order, Reservation};
use shared::table::{Cell, Column, DataTable, TableView};

use super::{order_tone, reservation_tone, stock_tone};
use crate::event::{EventSender, PageEvent};
use crate::toast::Toasts;

/// A record type shown by a [`ListPage`]
pub trait Listing: Record + Serialize {
    /// Noun used in "Failed to load {} data"
    const COLLECTION: &'static str;

    fn columns() -> Vec<Column<Self>>;
    fn wrap(result: AppResult<Vec<Self>>) -> PageEvent;
}

pub struct ListPage<T: Listing> {
    service: ReadOnlyService<T>,
    events: EventSender,
    pub rows: Vec<T>,
    pub loading: bool,
    pub table: DataTable<T>,
}

impl<T: Listing> ListPage<T> {
    pub fn new(service: ReadOnlyService<T>, events: EventSender) -> Self {
        Self {
            service,
            events,
            rows: Vec::new(),
            loading: false,
            table: DataTable::new(T::columns()),
        }
    }

    pub fn load(&mut self) {
        self.loading = true;
        let service = self.service.clone();
        let tx = self.events.clone();
        tokio::spawn(async move {
            let result = service.list().await;
            let _ = tx.send(T::wrap(result));
        });
    }

    pub fn view(&mut self) -> TableView<'_, T> {
        self.table.view(&self.rows)
    }

    pub fn apply(&mut self, result: AppResult<Vec<T>>, toasts: &mut Toasts) {
        self.loading = false;
        match result {
            Ok(rows) => self.rows = rows,
            Err(e) => {
                tracing::error!(error = %e, "Loading {} failed", T::COLLECTION);
                toasts.error(format!("Failed to load {} data", T::COLLECTION));
            }
        }
    }
}

pub type OrdersPage = ListPage<Order>;
pub type ReservationsPage = ListPage<Reservation>;
pub type InventoryPage = ListPage<InventoryItem>;

impl Listing for Order {
    const COLLECTION: &'static str = "orders";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::derive("Order", |o: &Order| format!("#{}", o.id)),
            Column::field("Customer", "customer"),
            Column::field("Items", "items"),
            Column::derive("Total", |o: &Order| format!("${}", o.total.round_dp(2))),
            Column::field("Status", "status")
                .with_render(|o: &Order| Cell::badge(o.status.label(), order_tone(o.status))),
        ]
    }

    fn wrap(result: AppResult<Vec<Self>>) -> PageEvent {
        PageEvent::Orders(result)
    }
}

impl Listing for Reservation {
    const COLLECTION: &'static str = "reservations";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::field("Name", "name"),
            Column::field("Date", "date"),
            Column::field("Time", "time"),
            Column::field("Guests", "guests"),
            Column::field("Status", "status")
                .with_render(|r: &Reservation| {
                    Cell::badge(r.status.label(), reservation_tone(r.status))
                }),
        ]
    }

    fn wrap(result: AppResult<Vec<Self>>) -> PageEvent {
        PageEvent::Reservations(result)
    }
}

impl Listing for InventoryItem {
    const COLLECTION: &'static str = "inventory";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::field("Item", "item"),
            Column::derive("Quantity", |i: &InventoryItem| i.quantity_label()),
            Column::field("Status", "status")
                .with_render(|i: &InventoryItem| Cell::badge(i.status.label(), stock_tone(i.status))),
        ]
    }

    fn wrap(result: AppResult<Vec<Self>>) -> PageEvent {
        PageEvent::Inventory(result)
    }
}
