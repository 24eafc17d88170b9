//! ward-store: store-row parsing and the ward snapshot document.
//!
//! The backend keeps timestamps as strings; this crate converts its rows
//! into typed `ward-core` orders, dropping malformed rows instead of
//! failing the batch.

pub mod parse;
pub mod records;
pub mod snapshot;

pub use parse::{parse_iv_rows, parse_med_rows};
pub use records::{IvRow, MedRow};
pub use snapshot::WardSnapshot;
