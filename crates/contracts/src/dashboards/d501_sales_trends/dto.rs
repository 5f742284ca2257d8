use serde::{Deserialize, Serialize};

use crate::dashboards::common::ChartSeries;
use crate::shared::analytics::MonthlyRevenue;

/// Response for the Sales Trends page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesTrendsResponse {
    /// Monthly revenue, chronological
    pub revenue_trend: ChartSeries<MonthlyRevenue>,
}
