use contracts::dashboards::common::{ChartMeta, ChartSeries};
use contracts::dashboards::d502_top_products::TopProductsResponse;

use crate::shared::analytics::{queries, CleanedDataset};

/// Build the Top Products page: products ranked by revenue
pub fn get_top_products(dataset: &CleanedDataset, top_n: usize) -> TopProductsResponse {
    TopProductsResponse {
        top_n,
        top_products: ChartSeries {
            chart: ChartMeta::bar("Top Products by Revenue", "Revenue ($)", "Product"),
            rows: queries::top_products(dataset, top_n),
        },
    }
}
