//! Country-name normalization.
//!
//! Replaces recognized free-text country spellings with the canonical name
//! from the reference list. Unknown values and canonical names pass through
//! unchanged; the transform never invents or drops cells.

use tis_model::{ModelError, Table};
use tis_standards::canonical_country;
use tracing::debug;

/// Normalize every cell of `column_name` in place of its free-text variant.
///
/// Returns the new table and the row indices that changed. Fails only if
/// the column does not exist.
pub fn rename_countries(table: &Table, column_name: &str) -> Result<(Table, Vec<usize>), ModelError> {
    let column = table
        .column(column_name)
        .ok_or_else(|| ModelError::MissingSourceColumn(column_name.to_string()))?;

    let mut changed = Vec::new();
    let mut cells = Vec::with_capacity(column.len());
    for (row, cell) in column.iter() {
        match cell {
            Some(value) => match canonical_country(value.trim()) {
                Some(canonical) if canonical != value => {
                    changed.push(row);
                    cells.push(Some(canonical.to_string()));
                }
                _ => cells.push(Some(value.to_string())),
            },
            None => cells.push(None),
        }
    }

    let mut renamed = table.clone();
    renamed.replace_cells(column_name, cells)?;
    debug!(
        column = column_name,
        renamed = changed.len(),
        "country normalization complete"
    );
    Ok((renamed, changed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tis_model::Column;

    #[test]
    fn renames_known_variants_only() {
        let table = Table::from_columns(vec![Column::from_text(
            "country",
            &["USA", "Canada", "Atlantis", ""],
        )])
        .unwrap();

        let (renamed, changed) = rename_countries(&table, "country").unwrap();
        let column = renamed.column("country").unwrap();
        assert_eq!(column.get(0), Some("United States"));
        assert_eq!(column.get(1), Some("Canada"));
        assert_eq!(column.get(2), Some("Atlantis"));
        assert_eq!(column.get(3), None);
        assert_eq!(changed, vec![0]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let table = Table::new();
        assert!(rename_countries(&table, "country").is_err());
    }
}
