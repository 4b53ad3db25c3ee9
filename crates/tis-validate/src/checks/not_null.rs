//! Unconditional presence check.
//!
//! Flags every missing cell. The single reporter of nulls: value-shape
//! checks (length, format, enum membership) skip missing cells so that a
//! blank is never double-counted.

use tis_model::{Column, ConstraintKind, Violation};

pub fn check(column: &Column, field: &str) -> Option<Violation> {
    let mut offenders = Vec::new();

    for (row, cell) in column.iter() {
        if cell.is_none() {
            offenders.push((row, None));
        }
    }

    if offenders.is_empty() {
        return None;
    }
    let message = format!("{field} has {} missing value(s)", offenders.len());
    Some(Violation::from_offenders(
        field,
        ConstraintKind::NotNull,
        offenders,
        message,
    ))
}
