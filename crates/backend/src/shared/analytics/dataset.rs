use chrono::{NaiveDate, NaiveDateTime};

use super::error::DatasetError;
use crate::domain::transaction::raw::present;
use crate::domain::transaction::{RawTransaction, Transaction};

/// Timestamp layouts tried in order when none are configured.
///
/// The first one is the native layout of the Online Retail export (`12/1/2010 8:26`).
/// Date-only layouts resolve to midnight.
pub const DEFAULT_TIMESTAMP_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d",
];

/// Immutable snapshot of cleaned transactions.
///
/// Built once by [`load_and_clean`]; every query takes it by shared reference.
#[derive(Debug, Clone, Default)]
pub struct CleanedDataset {
    records: Vec<Transaction>,
    dropped: usize,
}

impl CleanedDataset {
    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Raw rows discarded for lacking a customer id
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Drop rows without a customer, parse the rest and derive their fields.
///
/// Fails on the first retained row whose timestamp or numbers do not parse.
pub fn load_and_clean<I>(raw_rows: I, timestamp_formats: &[String]) -> Result<CleanedDataset, DatasetError>
where
    I: IntoIterator<Item = RawTransaction>,
{
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for (index, raw) in raw_rows.into_iter().enumerate() {
        let line = raw.line.unwrap_or(index as u64 + 1);

        let customer_id = present(raw.customer_id.as_deref()).map(|id| normalize_customer_id(&id));
        let Some(customer_id) = customer_id else {
            dropped += 1;
            continue;
        };

        let invoice_date = parse_timestamp(&raw.invoice_date, timestamp_formats).ok_or_else(|| {
            DatasetError::InvalidTimestamp {
                line,
                value: raw.invoice_date.clone(),
            }
        })?;

        let quantity = raw
            .quantity
            .trim()
            .parse::<i64>()
            .map_err(|_| DatasetError::InvalidNumber {
                line,
                field: "Quantity",
                value: raw.quantity.clone(),
            })?;

        let unit_price = parse_decimal(&raw.unit_price).ok_or_else(|| DatasetError::InvalidNumber {
            line,
            field: "UnitPrice",
            value: raw.unit_price.clone(),
        })?;

        records.push(Transaction::new(
            raw.invoice_no.trim().to_string(),
            raw.stock_code.trim().to_string(),
            present(raw.description.as_deref()),
            quantity,
            invoice_date,
            unit_price,
            customer_id,
            raw.country.trim().to_string(),
        ));
    }

    tracing::info!(
        "Dataset cleaned: {} records kept, {} dropped without customer id",
        records.len(),
        dropped
    );

    Ok(CleanedDataset { records, dropped })
}

/// Try each layout as a full timestamp, then as a date at midnight; `None` if none matches
fn parse_timestamp(value: &str, formats: &[String]) -> Option<NaiveDateTime> {
    let value = value.trim();
    let formats: Vec<&str> = if formats.is_empty() {
        DEFAULT_TIMESTAMP_FORMATS.to_vec()
    } else {
        formats.iter().map(String::as_str).collect()
    };

    formats
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok())
        .or_else(|| {
            formats.iter().find_map(|f| {
                NaiveDate::parse_from_str(value, f)
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
        })
}

/// Parse decimal number that may use comma as decimal separator
fn parse_decimal(s: &str) -> Option<f64> {
    let normalized = s.trim().replace(',', ".");
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Customer ids are often exported as floats ("17850.0"); keep the integer text
fn normalize_customer_id(id: &str) -> String {
    match id.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        _ => id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<RawTransaction> {
        vec![
            RawTransaction::new("A", Some("1"), 2, 5.0, "2024-01-05T10:00"),
            RawTransaction::new("A", Some("1"), 1, 3.0, "2024-01-05T10:05"),
            RawTransaction::new("B", Some("2"), -1, 5.0, "2024-02-01T14:00"),
            RawTransaction::new("C", None, 100, 9.0, "2024-03-01T09:00"),
        ]
    }

    #[test]
    fn test_drops_rows_without_customer() {
        let dataset = load_and_clean(fixture(), &[]).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.dropped(), 1);
        assert!(dataset.records().iter().all(|r| r.invoice_no != "C"));
    }

    #[test]
    fn test_derived_fields() {
        let dataset = load_and_clean(fixture(), &[]).unwrap();
        for r in dataset.records() {
            assert_eq!(r.total_price, r.quantity as f64 * r.unit_price);
        }
        let ret = &dataset.records()[2];
        assert_eq!(ret.total_price, -5.0);
        assert_eq!(ret.year_month.to_string(), "2024-02");
        assert_eq!(ret.hour, 14);
    }

    #[test]
    fn test_native_timestamp_layout() {
        let rows = vec![
            RawTransaction::new("536365", Some("17850.0"), 6, 2.55, "12/1/2010 8:26"),
            RawTransaction::new("536366", Some("17850"), 1, 1.0, "12/1/2010 8:26:00"),
            RawTransaction::new("536367", Some("17850"), 1, 1.0, "12/9/2010"),
            RawTransaction::new("536368", Some("17850"), 1, 1.0, "2024-01-05"),
        ];
        let dataset = load_and_clean(rows, &[]).unwrap();
        let r = &dataset.records()[0];
        assert_eq!(r.year_month.to_string(), "2010-12");
        assert_eq!(r.hour, 8);
        assert_eq!(r.customer_id, "17850");

        let with_seconds = &dataset.records()[1];
        assert_eq!(with_seconds.invoice_date, r.invoice_date);

        let date_only = &dataset.records()[2];
        assert_eq!(date_only.year_month.to_string(), "2010-12");
        assert_eq!(date_only.hour, 0);

        let iso_date = &dataset.records()[3];
        assert_eq!(iso_date.year_month.to_string(), "2024-01");
        assert_eq!(iso_date.hour, 0);
    }

    #[test]
    fn test_na_markers_count_as_missing_customer() {
        let rows = vec![
            RawTransaction::new("A", Some("1"), 1, 2.0, "2024-01-05T10:00"),
            RawTransaction::new("B", Some("NaN"), 1, 50.0, "2024-01-05T10:00"),
            RawTransaction::new("C", Some("NA"), 1, 70.0, "2024-01-05T10:00"),
        ];
        let dataset = load_and_clean(rows, &[]).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.dropped(), 2);
        assert_eq!(dataset.records()[0].customer_id, "1");
    }

    #[test]
    fn test_na_description_is_absent() {
        let rows = vec![
            RawTransaction::new("A", Some("1"), 1, 2.0, "2024-01-05T10:00").with_description("NA"),
            RawTransaction::new("B", Some("1"), 1, 2.0, "2024-01-05T10:00").with_description(" MUG "),
        ];
        let dataset = load_and_clean(rows, &[]).unwrap();
        assert_eq!(dataset.records()[0].description, None);
        assert_eq!(dataset.records()[1].description.as_deref(), Some("MUG"));
    }

    #[test]
    fn test_bad_timestamp_fails_whole_load() {
        let mut rows = fixture();
        rows.push(RawTransaction::new("D", Some("3"), 1, 1.0, "yesterday"));
        let err = load_and_clean(rows, &[]).unwrap_err();
        match err {
            DatasetError::InvalidTimestamp { line, value } => {
                assert_eq!(line, 5);
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_timestamp_on_dropped_row_is_ignored() {
        let mut rows = fixture();
        rows.push(RawTransaction::new("D", None, 1, 1.0, "yesterday"));
        let dataset = load_and_clean(rows, &[]).unwrap();
        assert_eq!(dataset.dropped(), 2);
    }

    #[test]
    fn test_configured_formats_replace_defaults() {
        let rows = vec![RawTransaction::new("A", Some("1"), 1, 1.0, "05.01.2024 10:00")];
        assert!(load_and_clean(rows.clone(), &[]).is_err());

        let formats = vec!["%d.%m.%Y %H:%M".to_string()];
        let dataset = load_and_clean(rows, &formats).unwrap();
        assert_eq!(dataset.records()[0].year_month.to_string(), "2024-01");
    }

    #[test]
    fn test_invalid_quantity() {
        let mut row = RawTransaction::new("A", Some("1"), 1, 1.0, "2024-01-05T10:00");
        row.quantity = "two".to_string();
        let err = load_and_clean(vec![row], &[]).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidNumber { line: 1, field: "Quantity", .. }
        ));
    }

    #[test]
    fn test_empty_input() {
        let dataset = load_and_clean(Vec::new(), &[]).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.dropped(), 0);
    }

    #[test]
    fn test_normalize_customer_id() {
        assert_eq!(normalize_customer_id("17850.0"), "17850");
        assert_eq!(normalize_customer_id("17850"), "17850");
        assert_eq!(normalize_customer_id("C-42"), "C-42");
        assert_eq!(normalize_customer_id("12.5"), "12.5");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("2.55"), Some(2.55));
        assert_eq!(parse_decimal(" 2,55 "), Some(2.55));
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("NaN"), None);
    }
}
