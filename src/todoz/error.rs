use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodozError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Todo not found: {0}")]
    ItemNotFound(String),

    #[error("Duplicate todo id: {0}")]
    DuplicateId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupt stored todo ({field}): {reason}")]
    CorruptData { field: &'static str, reason: String },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TodozError>;
