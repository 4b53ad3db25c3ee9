//! Structured validation results.

use serde::{Deserialize, Serialize};

use crate::template::ConstraintKind;

/// One constraint failure, listing every offending row.
///
/// `rows` and `values` are always the same length and correspond
/// positionally: `values[i]` is the cell of the mapped table at row
/// `rows[i]` when validation ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub kind: ConstraintKind,
    pub rows: Vec<usize>,
    pub values: Vec<Option<String>>,
    pub message: String,
}

impl Violation {
    /// Build a violation from `(row, value)` offender pairs.
    pub fn from_offenders(
        field: impl Into<String>,
        kind: ConstraintKind,
        offenders: Vec<(usize, Option<String>)>,
        message: impl Into<String>,
    ) -> Self {
        let mut rows = Vec::with_capacity(offenders.len());
        let mut values = Vec::with_capacity(offenders.len());
        for (row, value) in offenders {
            rows.push(row);
            values.push(value);
        }
        Self {
            field: field.into(),
            kind,
            rows,
            values,
            message: message.into(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Ordered violations from one validation run; empty means the data passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(rename = "template")]
    pub template_name: String,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(template_name: &str) -> Self {
        Self {
            template_name: template_name.to_string(),
            violations: Vec::new(),
        }
    }

    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// Total offending rows across all violations (rows may repeat).
    pub fn offending_row_count(&self) -> usize {
        self.violations.iter().map(Violation::row_count).sum()
    }
}
