//! Read-only services: orders, reservations, inventory

use shared::error::AppResult;
use shared::models::{InventoryItem, Order, Reservation};

use super::{Latency, Operation};
use crate::db::Record;
use crate::db::repository::ReadOnlyRepository;

/// List and get with the same delays as the CRUD services
#[derive(Clone)]
pub struct ReadOnlyService<T> {
    repo: ReadOnlyRepository<T>,
    latency: Latency,
}

impl<T: Record> ReadOnlyService<T> {
    pub fn new(repo: ReadOnlyRepository<T>, latency: Latency) -> Self {
        Self { repo, latency }
    }

    pub async fn list(&self) -> AppResult<Vec<T>> {
        self.latency.simulate(Operation::Fetch).await;
        Ok(self.repo.find_all().await)
    }

    pub async fn get(&self, id: i64) -> AppResult<Option<T>> {
        self.latency.simulate(Operation::Get).await;
        Ok(self.repo.find_by_id(id).await)
    }
}

pub type OrderService = ReadOnlyService<Order>;
pub type ReservationService = ReadOnlyService<Reservation>;
pub type InventoryService = ReadOnlyService<InventoryItem>;
