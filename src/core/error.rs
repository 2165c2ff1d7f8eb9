use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("Index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("No record with {field} = {id}")]
    IdNotFound { field: String, id: String },

    #[error("Field '{0}' not found on record")]
    MissingField(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Duplicate rank {rank} in field '{field}'")]
    DuplicateRank { field: String, rank: String },

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Lock error: {0}")]
    LockError(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RankError>;

impl<T> From<std::sync::PoisonError<T>> for RankError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::LockError(err.to_string())
    }
}

impl From<serde_json::Error> for RankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
