use std::path::PathBuf;

use thiserror::Error;

/// Malformed input: the dataset cannot be loaded.
///
/// Every variant is fatal. No partial dataset is produced when one is returned.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read dataset '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not valid {encoding}: {details}")]
    Decode {
        encoding: &'static str,
        details: String,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: unparseable invoice timestamp '{value}'")]
    InvalidTimestamp { line: u64, value: String },
}
