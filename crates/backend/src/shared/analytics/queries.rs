use contracts::shared::analytics::*;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::dataset::CleanedDataset;
use crate::domain::transaction::{Transaction, YearMonth};

/// Default row limit for ranked queries
pub const DEFAULT_TOP_N: usize = 10;

// ---------------------------------------------------------------------------
// Grouping helpers
// ---------------------------------------------------------------------------

/// Sum `total_price` per key; rows yielding `None` are left out
fn sum_by<'a, K, F>(records: &'a [Transaction], key: F) -> HashMap<K, f64>
where
    K: Eq + Hash,
    F: Fn(&'a Transaction) -> Option<K>,
{
    let mut sums: HashMap<K, f64> = HashMap::new();
    for r in records {
        if let Some(k) = key(r) {
            *sums.entry(k).or_insert(0.0) += r.total_price;
        }
    }
    sums
}

/// Count distinct invoices per key
fn distinct_invoices_by<'a, K, F>(records: &'a [Transaction], key: F) -> HashMap<K, u64>
where
    K: Eq + Hash,
    F: Fn(&'a Transaction) -> K,
{
    let mut invoices: HashMap<K, HashSet<&'a str>> = HashMap::new();
    for r in records {
        invoices.entry(key(r)).or_default().insert(r.invoice_no.as_str());
    }
    invoices
        .into_iter()
        .map(|(k, set)| (k, set.len() as u64))
        .collect()
}

/// Largest `n` values first; equal values ordered by key ascending
fn top_n_desc<K: Ord>(groups: HashMap<K, f64>, n: usize) -> Vec<(K, f64)> {
    let mut rows: Vec<(K, f64)> = groups.into_iter().collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows.truncate(n);
    rows
}

/// All groups, key ascending
fn ascending<K: Ord, V>(groups: HashMap<K, V>) -> Vec<(K, V)> {
    let mut rows: Vec<(K, V)> = groups.into_iter().collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    rows
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Total revenue, distinct customers and distinct invoices
pub fn kpi_summary(dataset: &CleanedDataset) -> KpiSummary {
    let records = dataset.records();
    let total_revenue = records.iter().map(|r| r.total_price).sum();
    let unique_customers = records
        .iter()
        .map(|r| r.customer_id.as_str())
        .collect::<HashSet<_>>()
        .len() as u64;
    let total_invoices = records
        .iter()
        .map(|r| r.invoice_no.as_str())
        .collect::<HashSet<_>>()
        .len() as u64;

    KpiSummary {
        total_revenue,
        unique_customers,
        total_invoices,
    }
}

/// Revenue per month, chronological
pub fn revenue_by_month(dataset: &CleanedDataset) -> Vec<MonthlyRevenue> {
    let sums: HashMap<YearMonth, f64> = sum_by(dataset.records(), |r| Some(r.year_month));
    ascending(sums)
        .into_iter()
        .map(|(ym, revenue)| MonthlyRevenue {
            year_month: ym.to_string(),
            revenue,
        })
        .collect()
}

/// Products with the highest revenue. Rows without a description are not ranked.
pub fn top_products(dataset: &CleanedDataset, n: usize) -> Vec<ProductRevenue> {
    let sums = sum_by(dataset.records(), |r| r.description.as_deref());
    let rows: Vec<ProductRevenue> = top_n_desc(sums, n)
        .into_iter()
        .map(|(description, revenue)| ProductRevenue {
            description: description.to_string(),
            revenue,
        })
        .collect();
    tracing::debug!("top_products: {} rows (n = {})", rows.len(), n);
    rows
}

/// Countries with the highest revenue
pub fn revenue_by_country(dataset: &CleanedDataset, n: usize) -> Vec<CountryRevenue> {
    let sums = sum_by(dataset.records(), |r| Some(r.country.as_str()));
    top_n_desc(sums, n)
        .into_iter()
        .map(|(country, revenue)| CountryRevenue {
            country: country.to_string(),
            revenue,
        })
        .collect()
}

/// Customers with the highest mean line-item value
pub fn avg_spend_by_customer(dataset: &CleanedDataset, n: usize) -> Vec<CustomerAvgSpend> {
    let mut totals: HashMap<&str, (f64, u64)> = HashMap::new();
    for r in dataset.records() {
        let entry = totals.entry(r.customer_id.as_str()).or_insert((0.0, 0));
        entry.0 += r.total_price;
        entry.1 += 1;
    }

    let means: HashMap<&str, f64> = totals
        .into_iter()
        .map(|(id, (sum, count))| (id, sum / count as f64))
        .collect();

    top_n_desc(means, n)
        .into_iter()
        .map(|(customer_id, avg_total_price)| CustomerAvgSpend {
            customer_id: customer_id.to_string(),
            avg_total_price,
        })
        .collect()
}

/// Distinct invoices per customer, every customer, ordered by customer id
pub fn purchase_frequency(dataset: &CleanedDataset) -> Vec<CustomerPurchaseCount> {
    let counts = distinct_invoices_by(dataset.records(), |r| r.customer_id.as_str());
    ascending(counts)
        .into_iter()
        .map(|(customer_id, invoice_count)| CustomerPurchaseCount {
            customer_id: customer_id.to_string(),
            invoice_count,
        })
        .collect()
}

/// Revenue per hour of day; only hours present in the data
pub fn revenue_by_hour(dataset: &CleanedDataset) -> Vec<HourlyRevenue> {
    let sums = sum_by(dataset.records(), |r| Some(r.hour));
    ascending(sums)
        .into_iter()
        .map(|(hour, revenue)| HourlyRevenue { hour, revenue })
        .collect()
}

/// Distinct invoices per month, chronological
pub fn orders_over_month(dataset: &CleanedDataset) -> Vec<MonthlyOrders> {
    let counts = distinct_invoices_by(dataset.records(), |r| r.year_month);
    ascending(counts)
        .into_iter()
        .map(|(ym, invoice_count)| MonthlyOrders {
            year_month: ym.to_string(),
            invoice_count,
        })
        .collect()
}
