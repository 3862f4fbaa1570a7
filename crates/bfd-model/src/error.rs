use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown record type: {0}")]
    InvalidRecordType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
