use serde::{Deserialize, Deserializer};

/// One line item as it appears in the source file, before cleaning.
///
/// Column names follow the header of the public "Online Retail" dataset.
/// Empty cells and NA markers (`NaN`, `NULL`, ...) become `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTransaction {
    #[serde(rename = "InvoiceNo")]
    pub invoice_no: String,
    #[serde(rename = "StockCode")]
    pub stock_code: String,
    #[serde(rename = "Description", deserialize_with = "blank_as_none", default)]
    pub description: Option<String>,
    #[serde(rename = "Quantity")]
    pub quantity: String,
    #[serde(rename = "InvoiceDate")]
    pub invoice_date: String,
    #[serde(rename = "UnitPrice")]
    pub unit_price: String,
    #[serde(rename = "CustomerID", deserialize_with = "blank_as_none", default)]
    pub customer_id: Option<String>,
    #[serde(rename = "Country")]
    pub country: String,
    /// 1-based line in the source file, header included
    #[serde(skip)]
    pub line: Option<u64>,
}

impl RawTransaction {
    /// Build a record in memory, mostly for tests and fixtures
    pub fn new(
        invoice_no: &str,
        customer_id: Option<&str>,
        quantity: i64,
        unit_price: f64,
        invoice_date: &str,
    ) -> Self {
        Self {
            invoice_no: invoice_no.to_string(),
            stock_code: String::new(),
            description: None,
            quantity: quantity.to_string(),
            invoice_date: invoice_date.to_string(),
            unit_price: unit_price.to_string(),
            customer_id: customer_id.map(str::to_string),
            country: String::new(),
            line: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = country.to_string();
        self
    }
}

/// Cell texts that tabular exports use for a missing value
const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True when a cell carries no value: blank, or one of the usual NA markers
pub fn is_missing(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || NA_TOKENS.contains(&value)
}

/// Trimmed value, or `None` when the cell is missing
pub fn present(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !is_missing(v))
        .map(|v| v.trim().to_string())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(present(value.as_deref()))
}
