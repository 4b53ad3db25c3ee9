//! Conditional requiredness.
//!
//! The target field must be populated on every row where the condition
//! column equals the condition value. The comparison is exact and
//! case-sensitive with no trimming.

use tis_model::{Column, ConstraintKind, Violation};

pub fn check(
    condition: &Column,
    target: &Column,
    field: &str,
    when_field: &str,
    when_value: &str,
) -> Option<Violation> {
    let mut offenders = Vec::new();

    for (row, cell) in condition.iter() {
        if cell != Some(when_value) {
            continue;
        }
        if target.get(row).is_none() {
            offenders.push((row, None));
        }
    }

    if offenders.is_empty() {
        return None;
    }
    let message = format!(
        "{field} is required when {when_field} is {when_value} ({} row(s))",
        offenders.len()
    );
    Some(Violation::from_offenders(
        field,
        ConstraintKind::ConditionalRequired,
        offenders,
        message,
    ))
}
