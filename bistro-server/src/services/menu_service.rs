//! Menu Service

use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::{MenuItem, MenuItemForm};

use super::{CrudService, Latency, Operation};
use crate::db::repository::{MenuItemRepository, Repository};

#[derive(Clone)]
pub struct MenuService {
    repo: MenuItemRepository,
    latency: Latency,
}

impl MenuService {
    pub fn new(repo: MenuItemRepository, latency: Latency) -> Self {
        Self { repo, latency }
    }
}

#[async_trait]
impl CrudService for MenuService {
    type Record = MenuItem;
    type Form = MenuItemForm;

    async fn list(&self) -> AppResult<Vec<MenuItem>> {
        self.latency.simulate(Operation::Fetch).await;
        Ok(self.repo.find_all().await)
    }

    async fn get(&self, id: i64) -> AppResult<Option<MenuItem>> {
        self.latency.simulate(Operation::Get).await;
        Ok(self.repo.find_by_id(id).await)
    }

    async fn create(&self, form: MenuItemForm) -> AppResult<MenuItem> {
        self.latency.simulate(Operation::Create).await;
        let item = self.repo.create(form).await;
        tracing::info!(id = item.id, name = %item.item_name, "Menu item created");
        Ok(item)
    }

    async fn update(&self, id: i64, form: MenuItemForm) -> AppResult<MenuItem> {
        self.latency.simulate(Operation::Update).await;
        let item = self.repo.update(id, form).await;
        tracing::info!(id, available = item.availability, "Menu item updated");
        Ok(item)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        self.latency.simulate(Operation::Delete).await;
        let removed = self.repo.delete(id).await;
        if removed {
            tracing::info!(id, "Menu item deleted");
        }
        Ok(removed)
    }
}
