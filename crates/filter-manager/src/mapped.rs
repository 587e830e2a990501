use filters::{FilterParams, FilterType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized `{ type, key, value, params }` view of a filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedFilter {
    #[serde(flatten)]
    pub params: FilterParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl MappedFilter {
    pub fn new(params: FilterParams, key: Option<String>, value: Option<String>) -> Self {
        MappedFilter { params, key, value }
    }

    pub fn filter_type(&self) -> FilterType {
        self.params.filter_type()
    }
}

/// Display form of a filter value: strings as-is, anything else as JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
