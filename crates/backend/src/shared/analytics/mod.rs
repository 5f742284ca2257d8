//! In-memory aggregation over the online retail transactions.
//!
//! [`loader`] builds a [`CleanedDataset`] once at startup; [`queries`] are
//! pure functions over it.

pub mod dataset;
pub mod error;
pub mod loader;
pub mod queries;

pub use dataset::{load_and_clean, CleanedDataset};
pub use error::DatasetError;
pub use loader::{load_from_path, LoadOptions, TextEncoding};
