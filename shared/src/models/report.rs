//! Dashboard and report payloads

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Order;

/// One named series of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// Chart data: shared x-axis labels plus one or more series
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn new<L: Into<String>>(labels: impl IntoIterator<Item = L>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            datasets: Vec::new(),
        }
    }

    pub fn with_dataset(mut self, label: impl Into<String>, data: Vec<f64>) -> Self {
        self.datasets.push(Dataset {
            label: label.into(),
            data,
        });
        self
    }

    /// Largest value across all series (0 when empty)
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// Headline numbers on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub revenue: Decimal,
    pub staff_count: usize,
    pub order_count: usize,
    pub reservation_count: usize,
}

/// Everything the dashboard page renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub stats: DashboardStats,
    /// Revenue and order volume over the week
    pub sales: ChartData,
    pub sales_by_category: ChartData,
    pub recent_orders: Vec<Order>,
}

/// Reports page payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub monthly_sales: ChartData,
    /// Percent share per category
    pub category_share: ChartData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_builder() {
        let chart = ChartData::new(["Jan", "Feb"])
            .with_dataset("Sales", vec![4500.0, 5200.0])
            .with_dataset("Orders", vec![12.0, 30.0]);
        assert_eq!(chart.labels, vec!["Jan", "Feb"]);
        assert_eq!(chart.datasets.len(), 2);
        assert_eq!(chart.max_value(), 5200.0);
        assert_eq!(ChartData::default().max_value(), 0.0);
    }
}
