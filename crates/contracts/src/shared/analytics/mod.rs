use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Scalar summary
// ---------------------------------------------------------------------------

/// Headline metrics over the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_revenue: f64,
    pub unique_customers: u64,
    pub total_invoices: u64,
}

// ---------------------------------------------------------------------------
// Result rows (grouping key + one measure)
// ---------------------------------------------------------------------------

/// Revenue summed over one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Month in format "YYYY-MM"
    pub year_month: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRevenue {
    pub description: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRevenue {
    pub country: String,
    pub revenue: f64,
}

/// Mean line-item value for one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAvgSpend {
    pub customer_id: String,
    pub avg_total_price: f64,
}

/// Number of distinct invoices placed by one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPurchaseCount {
    pub customer_id: String,
    pub invoice_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRevenue {
    /// Hour of day, 0..=23
    pub hour: u32,
    pub revenue: f64,
}

/// Distinct invoices per calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyOrders {
    /// Month in format "YYYY-MM"
    pub year_month: String,
    pub invoice_count: u64,
}
