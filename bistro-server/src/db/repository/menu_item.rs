//! Menu Item Repository

use shared::models::{MenuItem, MenuItemForm};

use super::Repository;
use crate::db::MemoryStore;

#[derive(Clone)]
pub struct MenuItemRepository {
    store: MemoryStore<MenuItem>,
}

impl MenuItemRepository {
    pub fn new(store: MemoryStore<MenuItem>) -> Self {
        Self { store }
    }
}

impl Repository<MenuItem, MenuItemForm, MenuItemForm> for MenuItemRepository {
    async fn find_all(&self) -> Vec<MenuItem> {
        self.store.all()
    }

    async fn find_by_id(&self, id: i64) -> Option<MenuItem> {
        self.store.get(id)
    }

    async fn create(&self, data: MenuItemForm) -> MenuItem {
        self.store.insert_with(|id| MenuItem::from_form(id, data))
    }

    async fn update(&self, id: i64, data: MenuItemForm) -> MenuItem {
        let build = |id| MenuItem::from_form(id, data.clone());
        self.store
            .replace_with(id, build)
            .unwrap_or_else(|| build(id))
    }

    async fn delete(&self, id: i64) -> bool {
        self.store.remove(id)
    }
}
