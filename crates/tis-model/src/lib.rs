//! Core data model for the import studio.
//!
//! Tables of string-or-missing cells, named templates with per-field
//! constraints, column mappings, and the violation report produced by the
//! validation engine.

pub mod error;
pub mod mapping;
pub mod table;
pub mod template;
pub mod violation;

pub use error::{ModelError, Result};
pub use mapping::{ColumnMapping, MappingEntry};
pub use table::{Column, Table};
pub use template::{Constraint, ConstraintKind, FieldRule, Template};
pub use violation::{ValidationReport, Violation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_roundtrips_through_json() {
        let mut report = ValidationReport::new("Customer Template");
        report.add(Violation::from_offenders(
            "externalId",
            ConstraintKind::Unique,
            vec![(2, Some("A1".to_string()))],
            "externalId contains duplicate values",
        ));
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: ValidationReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
    }
}
