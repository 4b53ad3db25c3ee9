//! Column mapping from template fields to source columns.
//!
//! The mapping direction is template field → source column: the interactive
//! step walks the template's fields and binds each to a column of the
//! uploaded file, so template fields are the unique keys. Applying a mapping
//! produces a new table whose columns are the mapped template fields, in
//! binding order, carrying the source cells unchanged.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::table::{Column, Table};

/// One template-field-to-source-column binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub field: String,
    pub source: String,
}

/// A finalized set of bindings, unique per template field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    entries: Vec<MappingEntry>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a template field to a source column. Fields may be bound once.
    pub fn bind(&mut self, field: impl Into<String>, source: impl Into<String>) -> Result<()> {
        let field = field.into();
        if self.source_for(&field).is_some() {
            return Err(ModelError::DuplicateMappingField(field));
        }
        self.entries.push(MappingEntry {
            field,
            source: source.into(),
        });
        Ok(())
    }

    pub fn source_for(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.source.as_str())
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate that every binding is unique and resolvable against `table`.
    pub fn check(&self, table: &Table) -> Result<()> {
        for (idx, entry) in self.entries.iter().enumerate() {
            if self.entries[..idx].iter().any(|e| e.field == entry.field) {
                return Err(ModelError::DuplicateMappingField(entry.field.clone()));
            }
            if !table.has_column(&entry.source) {
                return Err(ModelError::MissingSourceColumn(entry.source.clone()));
            }
        }
        Ok(())
    }

    /// Rename source columns to template fields, in binding order.
    ///
    /// Unmapped source columns are dropped; row indices are preserved.
    pub fn apply(&self, table: &Table) -> Result<Table> {
        self.check(table)?;
        let mut mapped = Table::new();
        for entry in &self.entries {
            let source = table
                .column(&entry.source)
                .ok_or_else(|| ModelError::MissingSourceColumn(entry.source.clone()))?;
            mapped.push_column(Column::new(entry.field.clone(), source.cells.clone()))?;
        }
        Ok(mapped)
    }
}
