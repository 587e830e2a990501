use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("{value} is not a valid boolean value for boolean field {field}")]
    InvalidBoolean { field: String, value: Value },

    #[error("{value} is not a valid number for number field {field}")]
    InvalidNumber { field: String, value: Value },

    #[error("{0} and {1} are mutually exclusive")]
    ConflictingBounds(&'static str, &'static str),

    #[error("Scripted field {0} has no script")]
    MissingScript(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
