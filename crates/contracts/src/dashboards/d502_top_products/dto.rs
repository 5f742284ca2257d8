use serde::{Deserialize, Serialize};

use crate::dashboards::common::ChartSeries;
use crate::shared::analytics::ProductRevenue;

/// Response for the Top Products page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopProductsResponse {
    /// Limit the ranking was computed with
    pub top_n: usize,
    pub top_products: ChartSeries<ProductRevenue>,
}
