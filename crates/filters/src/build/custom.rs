use crate::types::{Filter, FilterMeta, FilterParams, FilterState, FilterStateStore};
use serde_json::Value;

/// Wraps an arbitrary query DSL object in a custom filter.
pub fn build_custom_filter(
    index: Option<&str>,
    query: Value,
    disabled: bool,
    negate: bool,
    alias: Option<&str>,
    store: FilterStateStore,
) -> Filter {
    Filter {
        meta: FilterMeta {
            params: FilterParams::Custom,
            index: index.map(str::to_string),
            alias: alias.map(str::to_string),
            disabled,
            negate,
            ..Default::default()
        },
        query: Some(query),
        state: Some(FilterState { store }),
        ..Default::default()
    }
}

/// Shorthand for an enabled, non-negated custom filter with no store.
pub fn build_query_filter(query: Value, index: Option<&str>, alias: Option<&str>) -> Filter {
    Filter {
        meta: FilterMeta {
            index: index.map(str::to_string),
            alias: alias.map(str::to_string),
            ..Default::default()
        },
        query: Some(query),
        ..Default::default()
    }
}
