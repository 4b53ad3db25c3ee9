//! Text-transform utilities that run alongside the validation engine:
//! country-name normalization and out-of-alphabet character cleaning.
//! Both operate on whole tables and report which rows they touched.

pub mod characters;
pub mod countries;

pub use characters::{Language, clean_columns};
pub use countries::rename_countries;
