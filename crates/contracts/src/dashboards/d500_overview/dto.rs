use serde::{Deserialize, Serialize};

use crate::shared::analytics::KpiSummary;

/// Response for the Overview page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub kpi: KpiSummary,
    /// Cards in display order: revenue, customers, invoices
    pub cards: Vec<KpiCard>,
}

/// Single KPI card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    /// Card identifier (e.g., "total_revenue")
    pub id: String,
    /// Display name (e.g., "Total Revenue")
    pub label: String,
    /// Raw value, unrounded
    pub value: f64,
    /// Pre-formatted text (e.g., "$1,234.56" or "4,372")
    pub display: String,
    /// Colour hint for the card ("info", "success", "warning")
    pub color: String,
}
