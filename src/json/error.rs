//! JSON-specific error types

use crate::core::RankError;
use thiserror::Error;

pub type JsonResult<T> = Result<T, JsonError>;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("JSON parse error: {0}")]
    ParseError(String),

    #[error("Invalid document structure: {0}")]
    InvalidStructure(String),

    #[error("Record error: {0}")]
    Rank(#[from] RankError),
}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        JsonError::ParseError(err.to_string())
    }
}
