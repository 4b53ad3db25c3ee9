use thiserror::Error;

/// Configuration and I/O failures.
///
/// Malformed data never surfaces here; it becomes violations in the report.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ValidateError>;
