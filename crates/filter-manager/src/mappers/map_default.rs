use crate::{
    error::{MapperError, Result},
    mapped::MappedFilter,
};
use filters::{Filter, FilterParams};
use serde_json::Value;

/// Any filter carrying query DSL maps to a custom filter keyed by the DSL's
/// top-level key (`query` for current filters), with the DSL as value. A
/// filter of an unknown kind keeps its type and params.
pub fn map_default(filter: &Filter) -> Result<MappedFilter> {
    let dsl = match &filter.query {
        Some(query) => Some(("query", query)),
        None => filter
            .legacy
            .iter()
            .find(|(key, _)| !key.starts_with('$'))
            .map(|(key, value)| (key.as_str(), value)),
    };
    let Some((key, value)) = dsl else {
        return Err(MapperError::wrong_kind(filter));
    };

    let params = match &filter.meta.params {
        other @ FilterParams::Other { .. } => other.clone(),
        _ => FilterParams::Custom,
    };

    Ok(MappedFilter::new(
        params,
        Some(key.to_string()),
        Some(Value::to_string(value)),
    ))
}
