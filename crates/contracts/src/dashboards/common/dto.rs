use serde::{Deserialize, Serialize};

use crate::dashboards::d500_overview::OverviewResponse;
use crate::dashboards::d501_sales_trends::SalesTrendsResponse;
use crate::dashboards::d502_top_products::TopProductsResponse;
use crate::dashboards::d503_customer_insights::CustomerInsightsResponse;
use crate::enums::DashboardView;

/// Title shown above the navigation
pub const DASHBOARD_TITLE: &str = "Online Retail Dashboard";

/// How the frontend should draw a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    /// Horizontal bar chart, category on the y axis
    Bar,
    Histogram,
}

/// Display metadata for one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMeta {
    pub title: String,
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    /// Bin count, only for histograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bins: Option<u32>,
}

impl ChartMeta {
    pub fn line(title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.to_string(),
            kind: ChartKind::Line,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            bins: None,
        }
    }

    pub fn bar(title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            kind: ChartKind::Bar,
            ..Self::line(title, x_label, y_label)
        }
    }

    pub fn histogram(title: &str, x_label: &str, y_label: &str, bins: u32) -> Self {
        Self {
            kind: ChartKind::Histogram,
            bins: Some(bins),
            ..Self::line(title, x_label, y_label)
        }
    }
}

/// A result table together with how to chart it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries<T> {
    pub chart: ChartMeta,
    pub rows: Vec<T>,
}

/// Query parameters shared by all views
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewParams {
    /// Row limit for ranked charts; server default when absent
    #[serde(default)]
    pub top_n: Option<usize>,
}

/// Navigation entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewInfo {
    pub view: DashboardView,
    pub label: String,
}

impl From<DashboardView> for ViewInfo {
    fn from(view: DashboardView) -> Self {
        Self {
            view,
            label: view.display_name().to_string(),
        }
    }
}

/// Response for GET /api/dashboards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardCatalog {
    pub title: String,
    pub views: Vec<ViewInfo>,
    /// Number of cleaned transaction records behind every view
    pub record_count: u64,
}

/// Response for GET /api/dashboards/:view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum DashboardPayload {
    Overview(OverviewResponse),
    SalesTrends(SalesTrendsResponse),
    TopProducts(TopProductsResponse),
    CustomerInsights(CustomerInsightsResponse),
}

impl DashboardPayload {
    pub fn view(&self) -> DashboardView {
        match self {
            DashboardPayload::Overview(_) => DashboardView::Overview,
            DashboardPayload::SalesTrends(_) => DashboardView::SalesTrends,
            DashboardPayload::TopProducts(_) => DashboardView::TopProducts,
            DashboardPayload::CustomerInsights(_) => DashboardView::CustomerInsights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::MonthlyRevenue;

    #[test]
    fn test_payload_is_tagged_by_view_code() {
        let payload = DashboardPayload::SalesTrends(SalesTrendsResponse {
            revenue_trend: ChartSeries {
                chart: ChartMeta::line("Revenue Trend Over Time", "Month", "Revenue ($)"),
                rows: vec![MonthlyRevenue {
                    year_month: "2024-01".to_string(),
                    revenue: 13.0,
                }],
            },
        });

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["view"], "sales-trends");
        assert_eq!(value["revenue_trend"]["chart"]["kind"], "line");
        assert!(value["revenue_trend"]["chart"].get("bins").is_none());
        assert_eq!(value["revenue_trend"]["rows"][0]["year_month"], "2024-01");

        let back: DashboardPayload = serde_json::from_value(value).unwrap();
        assert_eq!(back.view(), DashboardView::SalesTrends);
    }

    #[test]
    fn test_histogram_carries_bins() {
        let meta = ChartMeta::histogram("Frequency", "Number of Purchases", "Customers", 20);
        assert_eq!(meta.kind, ChartKind::Histogram);
        assert_eq!(meta.bins, Some(20));
        assert_eq!(ChartMeta::bar("t", "x", "y").bins, None);
    }
}
