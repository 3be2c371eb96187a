use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file must contain header and data rows")]
    Format,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
