use std::sync::Arc;

use crate::core::Config;
use crate::db::Database;
use crate::db::repository::{
    InventoryRepository, MenuItemRepository, OrderRepository, ReservationRepository,
    StaffRepository,
};
use crate::services::{
    DashboardService, InventoryService, Latency, MenuService, OrderService, ReservationService,
    StaffService,
};
use crate::utils::time::{Clock, SystemClock};

/// Server state: the store plus one handle per service
///
/// Cloning is shallow; every clone sees the same collections. The console
/// builds one of these too, so both front ends share a single store when
/// they run in the same process.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Database,
    pub staff: StaffService,
    pub menu: MenuService,
    pub orders: OrderService,
    pub reservations: ReservationService,
    pub inventory: InventoryService,
    pub dashboard: DashboardService,
}

impl ServerState {
    /// Wire services over `db`
    pub fn new(config: Config, db: Database, clock: Arc<dyn Clock>) -> Self {
        let latency = Latency::from_flag(config.simulate_latency);
        Self {
            staff: StaffService::new(StaffRepository::new(db.staff.clone(), clock), latency),
            menu: MenuService::new(MenuItemRepository::new(db.menu.clone()), latency),
            orders: OrderService::new(OrderRepository::new(db.orders.clone()), latency),
            reservations: ReservationService::new(
                ReservationRepository::new(db.reservations.clone()),
                latency,
            ),
            inventory: InventoryService::new(InventoryRepository::new(db.inventory.clone()), latency),
            dashboard: DashboardService::new(db.clone(), latency),
            db,
            config,
        }
    }

    /// Seeded store and the system clock
    pub fn initialize(config: &Config) -> Self {
        tracing::info!(
            simulate_latency = config.simulate_latency,
            "Initializing in-memory store with demo data"
        );
        Self::new(config.clone(), Database::seeded(), Arc::new(SystemClock))
    }
}
