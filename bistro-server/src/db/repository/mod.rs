//! Repository Module
//!
//! CRUD operations over the in-memory [`MemoryStore`](super::MemoryStore)
//! collections. Repositories are thin, cheap to clone and hold no state of
//! their own beyond a store handle.

pub mod menu_item;
pub mod read_only;
pub mod staff;

// Re-exports
pub use menu_item::MenuItemRepository;
pub use read_only::{InventoryRepository, OrderRepository, ReadOnlyRepository, ReservationRepository};
pub use staff::StaffRepository;

/// Common repository trait for basic CRUD
///
/// The stores never reject a call, so nothing here returns a `Result`.
#[allow(async_fn_in_trait)]
pub trait Repository<T, CreateDto, UpdateDto> {
    async fn find_all(&self) -> Vec<T>;
    async fn find_by_id(&self, id: i64) -> Option<T>;
    async fn create(&self, data: CreateDto) -> T;
    /// Replace the record with `id`. A missing id leaves the store untouched
    /// and returns the record built from `data` anyway.
    async fn update(&self, id: i64, data: UpdateDto) -> T;
    /// `false` when nothing matched
    async fn delete(&self, id: i64) -> bool;
}
