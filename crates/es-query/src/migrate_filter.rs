use crate::error::Result;
use filters::{DataViewBase, Filter, build::phrase::get_converted_value_for_field};
use serde_json::{Map, Value, json};
use tracing::debug;

/// Rewrite legacy filter shapes into their current form.
///
/// A `match` clause with `type: phrase`, either under `query` or at the top
/// level of the filter, becomes a `match_phrase` clause under `query`. The
/// phrase value is converted to the field's type when the data view knows
/// the field.
pub fn migrate_filter(filter: &Filter, data_view: Option<&DataViewBase>) -> Result<Filter> {
    let legacy_match = filter
        .query
        .as_ref()
        .and_then(|query| query.get("match"))
        .or_else(|| filter.legacy.get("match"));

    let Some((field, params)) = legacy_match.and_then(deprecated_match_phrase) else {
        return Ok(filter.clone());
    };

    debug!("Migrating legacy match phrase filter on '{}'", field);

    let mut params = params.clone();
    params.remove("type");
    if let Some(field_meta) = data_view.and_then(|view| view.field(field))
        && let Some(query) = params.remove("query")
    {
        params.insert(
            "query".to_string(),
            get_converted_value_for_field(field_meta, query)?,
        );
    }

    let mut migrated = filter.clone();
    migrated.legacy.remove("match");
    migrated.query = Some(json!({ "match_phrase": { field: Value::Object(params) } }));
    Ok(migrated)
}

/// `{ "<field>": { "query": ..., "type": "phrase" } }`
fn deprecated_match_phrase(clause: &Value) -> Option<(&str, &Map<String, Value>)> {
    let (field, params) = clause.as_object()?.iter().next()?;
    let params = params.as_object()?;
    let is_phrase = params.get("type").and_then(Value::as_str) == Some("phrase");
    is_phrase.then_some((field.as_str(), params))
}
