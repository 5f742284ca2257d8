pub mod raw;
pub mod record;
pub mod year_month;

pub use raw::RawTransaction;
pub use record::Transaction;
pub use year_month::YearMonth;
