use crate::error::CliError;
use filters::{DataViewBase, Filter};
use serde::{Deserialize, de::DeserializeOwned};

/// A file holding either one value or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::InputRead {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::InputParse {
        path: path.to_string(),
        source,
    })
}

pub fn read_filter(path: &str) -> Result<Filter, CliError> {
    read_json(path)
}

pub fn read_filters(path: &str) -> Result<Vec<Filter>, CliError> {
    read_json::<OneOrMany<Filter>>(path).map(Vec::from)
}

pub fn read_data_views(path: &str) -> Result<Vec<DataViewBase>, CliError> {
    read_json::<OneOrMany<DataViewBase>>(path).map(Vec::from)
}
