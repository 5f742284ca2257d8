use serde::Deserialize;
use std::path::Path;

use super::dataset::{load_and_clean, CleanedDataset};
use super::error::DatasetError;
use crate::domain::transaction::RawTransaction;

/// Text encoding of the source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum TextEncoding {
    /// ISO-8859-1, one byte per character
    #[default]
    #[serde(rename = "latin1", alias = "iso-8859-1")]
    Latin1,
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
}

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Latin1 => "latin1",
            TextEncoding::Utf8 => "utf-8",
        }
    }
}

/// How to read the transactions file
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub encoding: TextEncoding,
    pub delimiter: u8,
    /// chrono layouts; empty means the built-in list
    pub timestamp_formats: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::Latin1,
            delimiter: b',',
            timestamp_formats: Vec::new(),
        }
    }
}

/// Read, decode, parse and clean the dataset in one shot.
pub fn load_from_path(path: &Path, options: &LoadOptions) -> Result<CleanedDataset, DatasetError> {
    tracing::info!(
        "Loading dataset from {} ({})",
        path.display(),
        options.encoding.name()
    );

    let bytes = std::fs::read(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = decode(&bytes, options.encoding)?;
    let rows = parse_csv(&text, options.delimiter)?;
    tracing::info!("Parsed {} raw rows", rows.len());

    load_and_clean(rows, &options.timestamp_formats)
}

/// Decode file bytes into text, stripping a UTF-8 BOM if present
pub fn decode(bytes: &[u8], encoding: TextEncoding) -> Result<String, DatasetError> {
    let text = match encoding {
        // Latin-1 code points coincide with byte values
        TextEncoding::Latin1 => bytes.iter().map(|&b| b as char).collect::<String>(),
        TextEncoding::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| DatasetError::Decode {
            encoding: encoding.name(),
            details: e.to_string(),
        })?,
    };

    let text = match encoding {
        TextEncoding::Utf8 => text.trim_start_matches('\u{FEFF}').to_string(),
        TextEncoding::Latin1 => text
            .strip_prefix("\u{EF}\u{BB}\u{BF}")
            .map(str::to_string)
            .unwrap_or(text),
    };

    Ok(text)
}

/// Parse delimited text with a header row into raw records.
///
/// Each record remembers its line in the file for error reporting.
pub fn parse_csv(text: &str, delimiter: u8) -> Result<Vec<RawTransaction>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    tracing::debug!(
        "Dataset CSV headers: {:?}",
        headers.iter().collect::<Vec<_>>()
    );

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line());
        let mut raw: RawTransaction = record.deserialize(Some(&headers))?;
        raw.line = line;
        rows.push(raw);
    }

    Ok(rows)
}
