//! In-memory tabular data.
//!
//! A [`Table`] is an ordered sequence of named columns. Every cell is either
//! text or missing; numeric- and boolean-looking source data stays as text
//! and is interpreted by the validators. Row indices are zero-based positions
//! into each column's cell vector and are stable for the lifetime of the
//! table, so violation reports can point back at source rows.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A named column of string-or-missing cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Option<String>>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Build a column from plain text cells, mapping blank strings to missing.
    pub fn from_text<S: AsRef<str>>(name: impl Into<String>, cells: &[S]) -> Self {
        let cells = cells
            .iter()
            .map(|cell| {
                let text = cell.as_ref();
                if text.is_empty() {
                    None
                } else {
                    Some(text.to_string())
                }
            })
            .collect();
        Self::new(name, cells)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `row`, or `None` if the cell is missing or out of range.
    pub fn get(&self, row: usize) -> Option<&str> {
        self.cells.get(row).and_then(|cell| cell.as_deref())
    }

    /// Iterate cells with their row indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<&str>)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(row, cell)| (row, cell.as_deref()))
    }
}

/// An ordered collection of equally sized columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table, rejecting duplicate column names and ragged columns.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let mut table = Self::new();
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    /// Append a column, enforcing name uniqueness and row alignment.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if self.column(&column.name).is_some() {
            return Err(ModelError::DuplicateColumn(column.name));
        }
        if let Some(first) = self.columns.first()
            && first.len() != column.len()
        {
            return Err(ModelError::RaggedColumn {
                actual: column.len(),
                column: column.name,
                expected: first.len(),
            });
        }
        self.columns.push(column);
        Ok(())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    /// Number of rows (cells per column).
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Replace the cells of an existing column, preserving its position.
    pub fn replace_cells(&mut self, name: &str, cells: Vec<Option<String>>) -> Result<()> {
        let height = self.height();
        if cells.len() != height {
            return Err(ModelError::RaggedColumn {
                column: name.to_string(),
                expected: height,
                actual: cells.len(),
            });
        }
        let Some(column) = self.columns.iter_mut().find(|column| column.name == name) else {
            return Err(ModelError::MissingSourceColumn(name.to_string()));
        };
        column.cells = cells;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_maps_blank_to_missing() {
        let column = Column::from_text("email", &["a@b.co", "", "c@d.co"]);
        assert_eq!(column.get(0), Some("a@b.co"));
        assert_eq!(column.get(1), None);
        assert_eq!(column.get(2), Some("c@d.co"));
    }

    #[test]
    fn rejects_duplicate_column() {
        let result = Table::from_columns(vec![
            Column::from_text("id", &["1"]),
            Column::from_text("id", &["2"]),
        ]);
        assert!(matches!(result, Err(ModelError::DuplicateColumn(_))));
    }

    #[test]
    fn rejects_ragged_columns() {
        let result = Table::from_columns(vec![
            Column::from_text("id", &["1", "2"]),
            Column::from_text("name", &["a"]),
        ]);
        assert!(matches!(result, Err(ModelError::RaggedColumn { .. })));
    }

    #[test]
    fn height_and_lookup() {
        let table = Table::from_columns(vec![
            Column::from_text("id", &["1", "2"]),
            Column::from_text("name", &["a", "b"]),
        ])
        .unwrap();
        assert_eq!(table.height(), 2);
        assert_eq!(table.width(), 2);
        assert!(table.has_column("name"));
        assert!(!table.has_column("NAME"));
    }
}
