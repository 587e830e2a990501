use super::phrase::get_phrase_script;
use crate::{
    data_view::{DataViewBase, DataViewFieldBase},
    error::Result,
    types::{Filter, FilterMeta, FilterParams},
};
use serde_json::{Value, json};

/// Builds a filter matching any of `values` on `field`.
pub fn build_phrases_filter(
    field: &DataViewFieldBase,
    values: Vec<Value>,
    data_view: &DataViewBase,
) -> Result<Filter> {
    let should = values
        .iter()
        .map(|value| {
            if field.scripted {
                Ok(json!({ "script": get_phrase_script(field, value)? }))
            } else {
                Ok(json!({ "match_phrase": { field.name.as_str(): value } }))
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Filter {
        meta: FilterMeta {
            params: FilterParams::Phrases(values),
            index: data_view.id.clone(),
            key: Some(field.name.clone()),
            ..Default::default()
        },
        query: Some(json!({ "bool": { "should": should, "minimum_should_match": 1 } })),
        ..Default::default()
    })
}
