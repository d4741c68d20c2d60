//! Read-only repositories (orders, reservations, inventory)

use shared::models::{InventoryItem, Order, Reservation};

use crate::db::{MemoryStore, Record};

/// List and lookup over a collection the back office never mutates
#[derive(Clone)]
pub struct ReadOnlyRepository<T> {
    store: MemoryStore<T>,
}

impl<T: Record> ReadOnlyRepository<T> {
    pub fn new(store: MemoryStore<T>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Vec<T> {
        self.store.all()
    }

    pub async fn find_by_id(&self, id: i64) -> Option<T> {
        self.store.get(id)
    }
}

pub type OrderRepository = ReadOnlyRepository<Order>;
pub type ReservationRepository = ReadOnlyRepository<Reservation>;
pub type InventoryRepository = ReadOnlyRepository<InventoryItem>;
