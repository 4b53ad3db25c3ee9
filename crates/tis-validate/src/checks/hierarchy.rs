//! Subsidiary hierarchy path check.
//!
//! A path is mandatory: missing or all-whitespace cells are violations.
//! Non-missing cells must be pipe-separated alternatives of colon-separated
//! hierarchy segments, e.g. `Parent:Child` or `Parent:Child|Other:Branch`.
//! No segment may be empty, so `Parent::Child` and trailing separators are
//! rejected.

use tis_model::{Column, ConstraintKind, Violation};

fn is_valid_path(value: &str) -> bool {
    value.split('|').all(|alternative| {
        !alternative.is_empty()
            && alternative
                .split(':')
                .all(|segment| !segment.trim().is_empty())
    })
}

pub fn check(column: &Column, field: &str) -> Option<Violation> {
    let mut offenders = Vec::new();

    for (row, cell) in column.iter() {
        match cell {
            None => offenders.push((row, None)),
            Some(value) if value.trim().is_empty() => {
                offenders.push((row, Some(value.to_string())));
            }
            Some(value) if !is_valid_path(value.trim()) => {
                offenders.push((row, Some(value.to_string())));
            }
            Some(_) => {}
        }
    }

    if offenders.is_empty() {
        return None;
    }
    let message = format!(
        "{field} has {} missing or invalid subsidiary path(s)",
        offenders.len()
    );
    Some(Violation::from_offenders(
        field,
        ConstraintKind::SubsidiaryHierarchy,
        offenders,
        message,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_and_alternative_paths() {
        assert!(is_valid_path("Parent:Child"));
        assert!(is_valid_path("Parent:Child|Other:Branch"));
        assert!(is_valid_path("Parent"));
    }

    #[test]
    fn rejects_empty_segments() {
        assert!(!is_valid_path("Parent::Child"));
        assert!(!is_valid_path("Parent:Child|"));
        assert!(!is_valid_path("|Parent:Child"));
        assert!(!is_valid_path(":Parent"));
        assert!(!is_valid_path(""));
    }

    #[test]
    fn missing_path_is_a_violation() {
        let column = Column::from_text("subsidiary", &["Parent:Child", "", "   "]);
        let violation = check(&column, "subsidiary").unwrap();
        assert_eq!(violation.rows, vec![1, 2]);
    }
}
