pub mod d500_overview;
pub mod d501_sales_trends;
pub mod d502_top_products;
pub mod d503_customer_insights;

use contracts::dashboards::common::{
    DashboardCatalog, DashboardPayload, ViewInfo, ViewParams, DASHBOARD_TITLE,
};
use contracts::enums::DashboardView;

use crate::shared::analytics::CleanedDataset;

/// Build the payload for one page.
///
/// `default_top_n` applies when the request gives no limit; limits below 1 are raised to 1.
pub fn render_view(
    view: DashboardView,
    dataset: &CleanedDataset,
    params: &ViewParams,
    default_top_n: usize,
) -> DashboardPayload {
    let top_n = params.top_n.unwrap_or(default_top_n).max(1);

    match view {
        DashboardView::Overview => {
            DashboardPayload::Overview(d500_overview::service::get_overview(dataset))
        }
        DashboardView::SalesTrends => {
            DashboardPayload::SalesTrends(d501_sales_trends::service::get_sales_trends(dataset))
        }
        DashboardView::TopProducts => DashboardPayload::TopProducts(
            d502_top_products::service::get_top_products(dataset, top_n),
        ),
        DashboardView::CustomerInsights => DashboardPayload::CustomerInsights(
            d503_customer_insights::service::get_customer_insights(dataset, top_n),
        ),
    }
}

/// Navigation catalogue for the frontend
pub fn catalog(dataset: &CleanedDataset) -> DashboardCatalog {
    DashboardCatalog {
        title: DASHBOARD_TITLE.to_string(),
        views: DashboardView::all().into_iter().map(ViewInfo::from).collect(),
        record_count: dataset.len() as u64,
    }
}
