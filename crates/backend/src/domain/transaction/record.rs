use chrono::{NaiveDateTime, Timelike};

use super::year_month::YearMonth;

/// A cleaned line item with its derived fields.
///
/// Only constructed by the loader, which guarantees a customer id is present
/// and the derived fields agree with the source fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub invoice_no: String,
    pub stock_code: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub invoice_date: NaiveDateTime,
    pub unit_price: f64,
    pub customer_id: String,
    pub country: String,

    /// `quantity * unit_price`, negative for returns
    pub total_price: f64,
    pub year_month: YearMonth,
    /// Hour of day, 0..=23
    pub hour: u32,
}

impl Transaction {
    /// Assemble a record and compute the derived fields
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        invoice_no: String,
        stock_code: String,
        description: Option<String>,
        quantity: i64,
        invoice_date: NaiveDateTime,
        unit_price: f64,
        customer_id: String,
        country: String,
    ) -> Self {
        Self {
            total_price: quantity as f64 * unit_price,
            year_month: YearMonth::from_datetime(&invoice_date),
            hour: invoice_date.hour(),
            invoice_no,
            stock_code,
            description,
            quantity,
            invoice_date,
            unit_price,
            customer_id,
            country,
        }
    }
}
