//! In-memory data store
//!
//! Each collection is an `Arc<RwLock<Vec<T>>>` seeded at startup. The store
//! is injected into repositories and cloned cheaply; nothing is global.
//! Every mutation holds the write lock for the whole read-modify-write, so id
//! assignment and insertion are atomic with respect to other writers.

pub mod repository;
pub mod seed;

use parking_lot::RwLock;
use shared::models::{InventoryItem, MenuItem, Order, Reservation, StaffMember};
use std::sync::Arc;

/// A record stored in a [`MemoryStore`]
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
}

impl Record for StaffMember {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for MenuItem {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Order {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Reservation {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for InventoryItem {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Shared, lock-protected collection
#[derive(Debug)]
pub struct MemoryStore<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Record> MemoryStore<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    /// Snapshot of all rows in insertion order
    pub fn all(&self) -> Vec<T> {
        self.rows.read().clone()
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.rows.read().iter().find(|r| r.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Append a record built from the next id (max existing id + 1, or 1)
    pub fn insert_with(&self, build: impl FnOnce(i64) -> T) -> T {
        let mut rows = self.rows.write();
        let id = rows.iter().map(Record::id).max().unwrap_or(0) + 1;
        let record = build(id);
        rows.push(record.clone());
        record
    }

    /// Replace the record with `id` in place; `None` when absent
    pub fn replace_with(&self, id: i64, build: impl FnOnce(i64) -> T) -> Option<T> {
        let mut rows = self.rows.write();
        let slot = rows.iter_mut().find(|r| r.id() == id)?;
        *slot = build(id);
        Some(slot.clone())
    }

    /// Remove the record with `id`; `false` when absent
    pub fn remove(&self, id: i64) -> bool {
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        rows.len() != before
    }
}

/// All collections of the back office
#[derive(Debug, Clone, Default)]
pub struct Database {
    pub staff: MemoryStore<StaffMember>,
    pub menu: MemoryStore<MenuItem>,
    pub orders: MemoryStore<Order>,
    pub reservations: MemoryStore<Reservation>,
    pub inventory: MemoryStore<InventoryItem>,
}

impl Database {
    /// Empty collections
    pub fn empty() -> Self {
        Self::default()
    }

    /// Collections filled with the demo data set
    pub fn seeded() -> Self {
        Self {
            staff: MemoryStore::new(seed::staff()),
            menu: MemoryStore::new(seed::menu()),
            orders: MemoryStore::new(seed::orders()),
            reservations: MemoryStore::new(seed::reservations()),
            inventory: MemoryStore::new(seed::inventory()),
        }
    }
}
