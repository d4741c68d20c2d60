//! Staff Repository

use std::sync::Arc;

use shared::models::{StaffForm, StaffMember};

use super::Repository;
use crate::db::MemoryStore;
use crate::utils::time::Clock;

#[derive(Clone)]
pub struct StaffRepository {
    store: MemoryStore<StaffMember>,
    clock: Arc<dyn Clock>,
}

impl StaffRepository {
    pub fn new(store: MemoryStore<StaffMember>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

impl Repository<StaffMember, StaffForm, StaffForm> for StaffRepository {
    async fn find_all(&self) -> Vec<StaffMember> {
        self.store.all()
    }

    async fn find_by_id(&self, id: i64) -> Option<StaffMember> {
        self.store.get(id)
    }

    async fn create(&self, data: StaffForm) -> StaffMember {
        let today = self.clock.today();
        self.store
            .insert_with(|id| StaffMember::from_form(id, data, today))
    }

    async fn update(&self, id: i64, data: StaffForm) -> StaffMember {
        let today = self.clock.today();
        let build = |id| StaffMember::from_form(id, data.clone(), today);
        self.store
            .replace_with(id, build)
            .unwrap_or_else(|| build(id))
    }

    async fn delete(&self, id: i64) -> bool {
        self.store.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::FixedClock;
    use chrono::NaiveDate;

    fn repo() -> StaffRepository {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        StaffRepository::new(MemoryStore::default(), Arc::new(FixedClock(today)))
    }

    fn form(first_name: &str, dob: NaiveDate) -> StaffForm {
        let mut form = StaffForm::blank(dob);
        form.first_name = first_name.into();
        form.date_of_birth = dob;
        form
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = repo();
        let dob = NaiveDate::from_ymd_opt(1990, 5, 5).unwrap();
        let mut last = 0;
        for name in ["A", "B", "C", "D"] {
            let created = repo.create(form(name, dob)).await;
            assert!(created.id > last);
            last = created.id;
        }
        assert_eq!(last, 4);
    }

    #[tokio::test]
    async fn test_age_recomputed_on_create_and_update() {
        let repo = repo();
        let created = repo
            .create(form("Lucas", NaiveDate::from_ymd_opt(2000, 6, 1).unwrap()))
            .await;
        assert_eq!(created.age, 24);

        let updated = repo
            .update(created.id, form("Lucas", NaiveDate::from_ymd_opt(1980, 12, 31).unwrap()))
            .await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.age, 44);
    }

    #[tokio::test]
    async fn test_update_missing_echoes_without_inserting() {
        let repo = repo();
        let echoed = repo
            .update(99, form("Ghost", NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()))
            .await;
        assert_eq!(echoed.id, 99);
        assert_eq!(echoed.first_name, "Ghost");
        assert_eq!(echoed.age, 34);
        assert!(repo.find_all().await.is_empty());
        assert_eq!(repo.find_by_id(99).await, None);
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let repo = repo();
        repo.create(form("Keep", NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()))
            .await;
        assert!(!repo.delete(42).await);
        assert_eq!(repo.find_all().await.len(), 1);
    }
}
