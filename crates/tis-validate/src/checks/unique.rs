//! Duplicate-value detection.
//!
//! Flags the second and later occurrences of a repeated value; the first
//! occurrence is never flagged. Missing cells are excluded from the check,
//! so two blanks do not count as duplicates of each other.

use std::collections::BTreeSet;

use tis_model::{Column, ConstraintKind, Violation};

pub fn check(column: &Column, field: &str) -> Option<Violation> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut offenders = Vec::new();

    for (row, cell) in column.iter() {
        let Some(value) = cell else {
            continue;
        };
        if !seen.insert(value) {
            offenders.push((row, Some(value.to_string())));
        }
    }

    if offenders.is_empty() {
        return None;
    }
    let message = format!("{field} contains {} duplicate value(s)", offenders.len());
    Some(Violation::from_offenders(
        field,
        ConstraintKind::Unique,
        offenders,
        message,
    ))
}
