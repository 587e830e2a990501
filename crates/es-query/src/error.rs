use filters::FilterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EsQueryError {
    #[error("Filter tree nests combinators deeper than the limit of {limit}")]
    DepthExceeded { limit: usize },

    #[error("Failed to convert filter: {0}")]
    Filter(#[from] FilterError),

    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported query clause: {0}")]
    UnsupportedQuery(String),

    #[error("Malformed {clause} clause: {message}")]
    MalformedQuery { clause: String, message: String },
}

pub type Result<T> = std::result::Result<T, EsQueryError>;
