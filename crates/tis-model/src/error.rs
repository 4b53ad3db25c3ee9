use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
    #[error("column {column} has {actual} cell(s), expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("template field mapped twice: {0}")]
    DuplicateMappingField(String),
    #[error("mapped source column not found in table: {0}")]
    MissingSourceColumn(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
