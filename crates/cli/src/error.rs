use es_query::EsQueryError;
use filter_manager::MapperError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input file '{path}': {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse input file '{path}' as JSON: {source}")]
    InputParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to compile filters: {0}")]
    Compile(#[from] EsQueryError),

    #[error("Failed to map filter: {0}")]
    Map(#[from] MapperError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
