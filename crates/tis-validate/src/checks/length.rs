//! Maximum length check.
//!
//! Counts characters, not bytes. Missing cells are skipped; requiredness
//! belongs to the `NotNull` check.

use tis_model::{Column, ConstraintKind, Violation};

pub fn check(column: &Column, field: &str, limit: usize) -> Option<Violation> {
    let mut offenders = Vec::new();

    for (row, cell) in column.iter() {
        let Some(value) = cell else {
            continue;
        };
        if value.chars().count() > limit {
            offenders.push((row, Some(value.to_string())));
        }
    }

    if offenders.is_empty() {
        return None;
    }
    let message = format!(
        "{field} exceeds max length of {limit} in {} value(s)",
        offenders.len()
    );
    Some(Violation::from_offenders(
        field,
        ConstraintKind::MaxLength,
        offenders,
        message,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_only_over_limit() {
        let column = Column::from_text("firstName", &["hello", "hello!"]);
        let violation = check(&column, "firstName", 5).unwrap();
        assert_eq!(violation.rows, vec![1]);
        assert_eq!(violation.values, vec![Some("hello!".to_string())]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let column = Column::from_text("firstName", &["héllo"]);
        assert!(check(&column, "firstName", 5).is_none());
    }

    #[test]
    fn missing_cells_are_skipped() {
        let column = Column::from_text("firstName", &["", "ok"]);
        assert!(check(&column, "firstName", 5).is_none());
    }
}
