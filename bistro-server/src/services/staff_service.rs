//! Staff Service

use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::{StaffForm, StaffMember};

use super::{CrudService, Latency, Operation};
use crate::db::repository::{Repository, StaffRepository};

#[derive(Clone)]
pub struct StaffService {
    repo: StaffRepository,
    latency: Latency,
}

impl StaffService {
    pub fn new(repo: StaffRepository, latency: Latency) -> Self {
        Self { repo, latency }
    }
}

#[async_trait]
impl CrudService for StaffService {
    type Record = StaffMember;
    type Form = StaffForm;

    async fn list(&self) -> AppResult<Vec<StaffMember>> {
        self.latency.simulate(Operation::Fetch).await;
        Ok(self.repo.find_all().await)
    }

    async fn get(&self, id: i64) -> AppResult<Option<StaffMember>> {
        self.latency.simulate(Operation::Get).await;
        Ok(self.repo.find_by_id(id).await)
    }

    async fn create(&self, form: StaffForm) -> AppResult<StaffMember> {
        self.latency.simulate(Operation::Create).await;
        let staff = self.repo.create(form).await;
        tracing::info!(id = staff.id, name = %staff.full_name(), "Staff member created");
        Ok(staff)
    }

    async fn update(&self, id: i64, form: StaffForm) -> AppResult<StaffMember> {
        self.latency.simulate(Operation::Update).await;
        let staff = self.repo.update(id, form).await;
        tracing::info!(id, "Staff member updated");
        Ok(staff)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        self.latency.simulate(Operation::Delete).await;
        let removed = self.repo.delete(id).await;
        if removed {
            tracing::info!(id, "Staff member deleted");
        } else {
            tracing::debug!(id, "Delete of unknown staff member ignored");
        }
        Ok(removed)
    }
}
