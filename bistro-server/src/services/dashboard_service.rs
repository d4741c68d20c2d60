//! Dashboard and report aggregation

use rust_decimal::Decimal;
use shared::error::AppResult;
use shared::models::{ChartData, DashboardData, DashboardStats, ReportData};

use super::{Latency, Operation};
use crate::db::{Database, seed};

/// How many orders the dashboard lists under "Recent Orders"
pub const RECENT_ORDERS: usize = 5;

#[derive(Clone)]
pub struct DashboardService {
    db: Database,
    latency: Latency,
}

impl DashboardService {
    pub fn new(db: Database, latency: Latency) -> Self {
        Self { db, latency }
    }

    /// Headline stats plus chart series.
    ///
    /// Revenue is the sum of all non-cancelled order totals. Recent orders
    /// are the newest by id.
    pub async fn dashboard(&self) -> AppResult<DashboardData> {
        self.latency.simulate(Operation::Fetch).await;

        let orders = self.db.orders.all();
        let revenue: Decimal = orders
            .iter()
            .filter(|o| o.status.counts_as_revenue())
            .map(|o| o.total)
            .sum();

        let stats = DashboardStats {
            revenue,
            staff_count: self.db.staff.len(),
            order_count: orders.len(),
            reservation_count: self.db.reservations.len(),
        };

        let (days, revenue_series, order_series) = seed::weekly_sales();
        let sales = ChartData::new(days)
            .with_dataset("Revenue", revenue_series)
            .with_dataset("Orders", order_series);

        let (categories, share) = seed::category_share();
        let sales_by_category = ChartData::new(categories).with_dataset("Sales", share);

        let mut recent_orders = orders;
        recent_orders.sort_by(|a, b| b.id.cmp(&a.id));
        recent_orders.truncate(RECENT_ORDERS);

        Ok(DashboardData {
            stats,
            sales,
            sales_by_category,
            recent_orders,
        })
    }

    pub async fn reports(&self) -> AppResult<ReportData> {
        self.latency.simulate(Operation::Fetch).await;

        let (months, sales) = seed::monthly_sales();
        let (categories, share) = seed::category_share();

        Ok(ReportData {
            monthly_sales: ChartData::new(months).with_dataset("Sales", sales),
            category_share: ChartData::new(categories).with_dataset("Share", share),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Order, OrderStatus};

    #[tokio::test]
    async fn test_dashboard_stats_from_store() {
        let db = Database::seeded();
        db.orders.insert_with(|id| Order {
            id,
            customer: "Walk-in".into(),
            items: 1,
            total: Decimal::new(1000, 2),
            status: OrderStatus::Cancelled,
        });
        let service = DashboardService::new(db.clone(), Latency::disabled());

        let data = service.dashboard().await.unwrap();
        // 45.99 + 29.99, the cancelled order is excluded
        assert_eq!(data.stats.revenue, Decimal::new(7598, 2));
        assert_eq!(data.stats.order_count, 3);
        assert_eq!(data.stats.staff_count, db.staff.len());
        assert_eq!(data.stats.reservation_count, 2);
        assert_eq!(data.recent_orders.first().map(|o| o.id), Some(3));
    }

    #[tokio::test]
    async fn test_reports_series() {
        let service = DashboardService::new(Database::empty(), Latency::disabled());
        let report = service.reports().await.unwrap();
        assert_eq!(report.monthly_sales.labels.len(), 6);
        assert_eq!(report.monthly_sales.datasets[0].data[5], 6500.0);
        assert_eq!(report.category_share.labels[0], "Food");
    }
}
