use contracts::dashboards::d500_overview::{KpiCard, OverviewResponse};
use contracts::shared::analytics::KpiSummary;

use crate::shared::analytics::{queries, CleanedDataset};
use crate::shared::format::{format_money, format_number};

/// Build the Overview page: three KPI cards
pub fn get_overview(dataset: &CleanedDataset) -> OverviewResponse {
    let kpi = queries::kpi_summary(dataset);
    OverviewResponse {
        cards: build_cards(&kpi),
        kpi,
    }
}

fn build_cards(kpi: &KpiSummary) -> Vec<KpiCard> {
    vec![
        KpiCard {
            id: "total_revenue".to_string(),
            label: "Total Revenue".to_string(),
            value: kpi.total_revenue,
            display: format_money(kpi.total_revenue),
            color: "info".to_string(),
        },
        KpiCard {
            id: "unique_customers".to_string(),
            label: "Unique Customers".to_string(),
            value: kpi.unique_customers as f64,
            display: format_number(kpi.unique_customers),
            color: "success".to_string(),
        },
        KpiCard {
            id: "total_invoices".to_string(),
            label: "Total Invoices".to_string(),
            value: kpi.total_invoices as f64,
            display: format_number(kpi.total_invoices),
            color: "warning".to_string(),
        },
    ]
}
