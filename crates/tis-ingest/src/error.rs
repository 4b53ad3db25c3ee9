use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported encoding in {path}: {encoding}")]
    UnsupportedEncoding { path: PathBuf, encoding: &'static str },
    #[error("no header row detected in {path}")]
    NoHeaderDetected { path: PathBuf },
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
    #[error("failed to read workbook {path}: {message}")]
    WorkbookRead { path: PathBuf, message: String },
    #[error("sheet not found in {path}: {sheet}")]
    SheetNotFound { path: PathBuf, sheet: String },
    #[error("failed to write {path}: {message}")]
    Export { path: PathBuf, message: String },
    #[error("malformed table: {0}")]
    Model(#[from] tis_model::ModelError),
}

pub type Result<T> = std::result::Result<T, IngestError>;
