//! Canonical reference data for the import studio.
//!
//! Fixed enumerated sets used for membership validation (countries,
//! currencies, payment terms) and the country synonym table used by the
//! normalizer. All tables are static; lookup sets are built lazily on first
//! use.

pub mod countries;
pub mod currencies;
pub mod terms;

pub use countries::{COUNTRIES, COUNTRY_SYNONYMS, canonical_country, is_canonical_country};
pub use currencies::{CURRENCIES, is_canonical_currency};
pub use terms::{PAYMENT_TERMS, is_canonical_term};
