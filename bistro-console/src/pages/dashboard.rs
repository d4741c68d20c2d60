//! Dashboard and reports

use bistro_server::services::DashboardService;
use shared::AppResult;
use shared::models::{DashboardData, ReportData};

use crate::event::{EventSender, PageEvent};
use crate::toast::Toasts;

pub struct DashboardPage {
    service: DashboardService,
    events: EventSender,
    pub data: Option<DashboardData>,
    pub loading: bool,
}

impl DashboardPage {
    pub fn new(service: DashboardService, events: EventSender) -> Self {
        Self {
            service,
            events,
            data: None,
            loading: false,
        }
    }

    pub fn load(&mut self) {
        self.loading = true;
        let service = self.service.clone();
        let tx = self.events.clone();
        tokio::spawn(async move {
            let _ = tx.send(PageEvent::Dashboard(service.dashboard().await));
        });
    }

    pub fn apply(&mut self, result: AppResult<DashboardData>, toasts: &mut Toasts) {
        self.loading = false;
        match result {
            Ok(data) => self.data = Some(data),
            Err(e) => {
                tracing::error!(error = %e, "Loading dashboard failed");
                toasts.error("Failed to load dashboard data");
            }
        }
    }
}

pub struct ReportsPage {
    service: DashboardService,
    events: EventSender,
    pub data: Option<ReportData>,
    pub loading: bool,
}

impl ReportsPage {
    pub fn new(service: DashboardService, events: EventSender) -> Self {
        Self {
            service,
            events,
            data: None,
            loading: false,
        }
    }

    pub fn load(&mut self) {
        self.loading = true;
        let service = self.service.clone();
        let tx = self.events.clone();
        tokio::spawn(async move {
            let _ = tx.send(PageEvent::Reports(service.reports().await));
        });
    }

    pub fn apply(&mut self, result: AppResult<ReportData>, toasts: &mut Toasts) {
        self.loading = false;
        match result {
            Ok(data) => self.data = Some(data),
            Err(e) => {
                tracing::error!(error = %e, "Loading reports failed");
                toasts.error("Failed to load report data");
            }
        }
    }
}
