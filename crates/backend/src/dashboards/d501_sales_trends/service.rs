use contracts::dashboards::common::{ChartMeta, ChartSeries};
use contracts::dashboards::d501_sales_trends::SalesTrendsResponse;

use crate::shared::analytics::{queries, CleanedDataset};

/// Build the Sales Trends page: monthly revenue line
pub fn get_sales_trends(dataset: &CleanedDataset) -> SalesTrendsResponse {
    SalesTrendsResponse {
        revenue_trend: ChartSeries {
            chart: ChartMeta::line("Revenue Trend Over Time", "Month", "Revenue ($)"),
            rows: queries::revenue_by_month(dataset),
        },
    }
}
