use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Cannot open PDF {}: {message}", path.display())]
    OpenFailure { path: PathBuf, message: String },

    #[error("No usable table data extracted from {file}")]
    NoData { file: String },

    #[error("PDF processing error: {0}")]
    PdfError(#[from] lopdf::Error),

    #[error("Spreadsheet error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;
