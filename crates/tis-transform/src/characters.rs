//! Out-of-alphabet character cleaning.
//!
//! Keeps only the characters in a language-specific allowed set and drops
//! everything else. English keeps printable ASCII plus newline; Arabic adds
//! the two main Arabic Unicode blocks.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tis_model::{ModelError, Table};
use tracing::debug;

/// Alphabet selection for the allowed-character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Arabic,
}

static ENGLISH_ALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x20-\x7E\n]+").expect("english character class"));

static ARABIC_ALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x20-\x7E\u{0600}-\u{06FF}\u{0750}-\u{077F}\n]+")
        .expect("arabic character class")
});

impl Language {
    fn allowed(self) -> &'static Regex {
        match self {
            Self::English => &ENGLISH_ALLOWED,
            Self::Arabic => &ARABIC_ALLOWED,
        }
    }
}

/// Keep only allowed runs of characters, concatenated in order.
fn strip_disallowed(value: &str, allowed: &Regex) -> String {
    allowed
        .find_iter(value)
        .map(|run| run.as_str())
        .collect::<String>()
}

/// Clean the named columns of a table.
///
/// Returns the cleaned table and the sorted, de-duplicated row indices where
/// at least one cell changed. Missing cells and unlisted columns are left
/// untouched; a column name that is not in the table is an error.
pub fn clean_columns(
    table: &Table,
    columns: &[&str],
    language: Language,
) -> Result<(Table, Vec<usize>), ModelError> {
    let allowed = language.allowed();
    let mut cleaned = table.clone();
    let mut changed_rows: BTreeSet<usize> = BTreeSet::new();

    for &column_name in columns {
        let column = table
            .column(column_name)
            .ok_or_else(|| ModelError::MissingSourceColumn(column_name.to_string()))?;

        let mut cells = Vec::with_capacity(column.len());
        for (row, cell) in column.iter() {
            match cell {
                Some(value) => {
                    let stripped = strip_disallowed(value, allowed);
                    if stripped != value {
                        changed_rows.insert(row);
                    }
                    cells.push(Some(stripped));
                }
                None => cells.push(None),
            }
        }
        cleaned.replace_cells(column_name, cells)?;
    }

    debug!(
        columns = columns.len(),
        changed_rows = changed_rows.len(),
        "character cleaning complete"
    );
    Ok((cleaned, changed_rows.into_iter().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tis_model::Column;

    #[test]
    fn english_strips_non_ascii() {
        let table = Table::from_columns(vec![Column::from_text(
            "name",
            &["plain", "smart\u{201D}quote", "tab\there"],
        )])
        .unwrap();

        let (cleaned, changed) = clean_columns(&table, &["name"], Language::English).unwrap();
        let column = cleaned.column("name").unwrap();
        assert_eq!(column.get(0), Some("plain"));
        assert_eq!(column.get(1), Some("smartquote"));
        assert_eq!(column.get(2), Some("tabhere"));
        assert_eq!(changed, vec![1, 2]);
    }

    #[test]
    fn arabic_keeps_arabic_blocks() {
        let table = Table::from_columns(vec![Column::from_text(
            "name",
            &["\u{0645}\u{0631}\u{062D}\u{0628}\u{0627} world"],
        )])
        .unwrap();

        let (cleaned, changed) = clean_columns(&table, &["name"], Language::Arabic).unwrap();
        assert_eq!(
            cleaned.column("name").unwrap().get(0),
            Some("\u{0645}\u{0631}\u{062D}\u{0628}\u{0627} world")
        );
        assert!(changed.is_empty());

        let (cleaned, changed) = clean_columns(&table, &["name"], Language::English).unwrap();
        assert_eq!(cleaned.column("name").unwrap().get(0), Some(" world"));
        assert_eq!(changed, vec![0]);
    }

    #[test]
    fn untouched_columns_keep_their_cells() {
        let table = Table::from_columns(vec![
            Column::from_text("clean_me", &["a\u{00E9}b"]),
            Column::from_text("leave_me", &["caf\u{00E9}"]),
        ])
        .unwrap();

        let (cleaned, _) = clean_columns(&table, &["clean_me"], Language::English).unwrap();
        assert_eq!(cleaned.column("clean_me").unwrap().get(0), Some("ab"));
        assert_eq!(cleaned.column("leave_me").unwrap().get(0), Some("caf\u{00E9}"));
    }

    #[test]
    fn rows_deduplicated_across_columns() {
        let table = Table::from_columns(vec![
            Column::from_text("a", &["x\u{00E9}", "ok"]),
            Column::from_text("b", &["y\u{00E9}", "ok"]),
        ])
        .unwrap();

        let (_, changed) = clean_columns(&table, &["a", "b"], Language::English).unwrap();
        assert_eq!(changed, vec![0]);
    }
}
