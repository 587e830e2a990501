use crate::error::{EsQueryError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling how filters are turned into query DSL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EsQueryFiltersConfig {
    /// Drop filters whose field does not exist in their data view.
    pub ignore_filter_if_field_not_in_index: bool,
    /// Passed through as `ignore_unmapped` on generated `nested` queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested_ignore_unmapped: Option<bool>,
    /// Maximum nesting of AND/OR/combined filters. Unlimited when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl EsQueryFiltersConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| EsQueryError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| EsQueryError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn with_ignore_filter_if_field_not_in_index(mut self, ignore: bool) -> Self {
        self.ignore_filter_if_field_not_in_index = ignore;
        self
    }

    pub fn with_nested_ignore_unmapped(mut self, ignore: bool) -> Self {
        self.nested_ignore_unmapped = Some(ignore);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
