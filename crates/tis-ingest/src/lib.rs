//! File ingestion and export for the import studio.
//!
//! Produces and consumes the string-or-missing [`tis_model::Table`] the
//! validation engine operates on. No type inference happens here: numeric
//! and boolean source data stays text so validators see the raw cells.

pub mod csv;
pub mod error;
pub mod excel;

pub use csv::{read_csv_table, validate_encoding, write_csv_table};
pub use error::{IngestError, Result};
pub use excel::read_xlsx_table;
