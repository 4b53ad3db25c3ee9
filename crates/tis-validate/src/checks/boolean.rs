//! Boolean literal check.
//!
//! One canonical rule for every boolean-constrained field: trim, uppercase,
//! then membership in {TRUE, FALSE}. This accepts `true`, `False`, `TRUE`
//! and the like without enumerating cases. Missing cells are skipped.

use tis_model::{Column, ConstraintKind, Violation};

fn is_boolean_literal(value: &str) -> bool {
    matches!(value.trim().to_uppercase().as_str(), "TRUE" | "FALSE")
}

pub fn check(column: &Column, field: &str) -> Option<Violation> {
    let mut offenders = Vec::new();

    for (row, cell) in column.iter() {
        let Some(value) = cell else {
            continue;
        };
        if !is_boolean_literal(value) {
            offenders.push((row, Some(value.to_string())));
        }
    }

    if offenders.is_empty() {
        return None;
    }
    let message = format!("{field} contains {} non-boolean value(s)", offenders.len());
    Some(Violation::from_offenders(
        field,
        ConstraintKind::BooleanEnum,
        offenders,
        message,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_casing() {
        let column = Column::from_text("isPerson", &["TRUE", "false", "True"]);
        assert!(check(&column, "isPerson").is_none());
    }

    #[test]
    fn rejects_non_boolean_values() {
        let column = Column::from_text("isPerson", &["yes", "1", "FALSE"]);
        let violation = check(&column, "isPerson").unwrap();
        assert_eq!(violation.rows, vec![0, 1]);
    }
}
