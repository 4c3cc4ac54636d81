use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractionError>;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Failed to read PDF source: {0}")]
    FileUnreadable(#[from] std::io::Error),

    #[error("Invalid PDF document: {0}")]
    InvalidDocument(String),
}

/// Coarse classification of an [`ExtractionError`], for hosts that map
/// failures to exit codes or HTTP statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    FileUnreadable,
    InvalidDocument,
}

impl ExtractionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractionError::FileUnreadable(_) => ErrorKind::FileUnreadable,
            ExtractionError::InvalidDocument(_) => ErrorKind::InvalidDocument,
        }
    }
}
