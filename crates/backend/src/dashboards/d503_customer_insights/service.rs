use contracts::dashboards::common::{ChartMeta, ChartSeries};
use contracts::dashboards::d503_customer_insights::CustomerInsightsResponse;

use crate::shared::analytics::{queries, CleanedDataset};

/// Bins for the purchase frequency histogram
const PURCHASE_FREQUENCY_BINS: u32 = 20;

/// Build the Customer Insights page: five charts over customers and time
pub fn get_customer_insights(dataset: &CleanedDataset, top_n: usize) -> CustomerInsightsResponse {
    CustomerInsightsResponse {
        top_n,
        revenue_by_country: ChartSeries {
            chart: ChartMeta::bar("Revenue by Country", "Revenue ($)", "Country"),
            rows: queries::revenue_by_country(dataset, top_n),
        },
        avg_spending: ChartSeries {
            chart: ChartMeta::bar(
                "Top Customers by Average Spending",
                "Average Spending ($)",
                "Customer ID",
            ),
            rows: queries::avg_spend_by_customer(dataset, top_n),
        },
        purchase_frequency: ChartSeries {
            chart: ChartMeta::histogram(
                "Frequency of Purchases per Customer",
                "Number of Purchases",
                "Customers",
                PURCHASE_FREQUENCY_BINS,
            ),
            rows: queries::purchase_frequency(dataset),
        },
        revenue_by_hour: ChartSeries {
            chart: ChartMeta::line("Revenue by Hour of Day", "Hour of Day", "Revenue ($)"),
            rows: queries::revenue_by_hour(dataset),
        },
        orders_over_time: ChartSeries {
            chart: ChartMeta::line("Number of Orders Over Time", "Month", "Number of Orders"),
            rows: queries::orders_over_month(dataset),
        },
    }
}
