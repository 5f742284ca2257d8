use serde::{Deserialize, Serialize};

use crate::dashboards::common::ChartSeries;
use crate::shared::analytics::{
    CountryRevenue, CustomerAvgSpend, CustomerPurchaseCount, HourlyRevenue, MonthlyOrders,
};

/// Response for the Customer Insights page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInsightsResponse {
    /// Limit applied to the ranked charts
    pub top_n: usize,
    pub revenue_by_country: ChartSeries<CountryRevenue>,
    pub avg_spending: ChartSeries<CustomerAvgSpend>,
    /// Full per-customer set, the frontend bins it
    pub purchase_frequency: ChartSeries<CustomerPurchaseCount>,
    pub revenue_by_hour: ChartSeries<HourlyRevenue>,
    pub orders_over_time: ChartSeries<MonthlyOrders>,
}
