// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Errors raised while turning a report into a ResultCount
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Report is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Unsupported report encoding: {0}")]
    UnknownEncoding(String),

    #[error("Report is not valid {0}")]
    Malformed(&'static str),

    #[error("Attribute '{name}' is not an integer: {value:?}")]
    InvalidAttribute { name: String, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Usage: parse-test-results <test-results-file>")]
    Usage,

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),
}
