use crate::from_filters::translate_to_query;
use filters::{DataViewBase, Filter, get_filter_field};
use serde_json::{Map, Value, json};
use tracing::debug;

/// Wrap a filter on a field living under a nested object into a `nested`
/// query on that object's path.
///
/// Filters without a data view, without a field, or on a field that is not
/// nested come back unchanged. A wrapped filter keeps only its `meta`.
pub fn handle_nested_filter(
    filter: Filter,
    data_view: Option<&DataViewBase>,
    ignore_unmapped: Option<bool>,
) -> Filter {
    let Some(view) = data_view else {
        return filter;
    };
    let Some(path) = get_filter_field(&filter)
        .and_then(|name| view.field(name))
        .and_then(|field| field.nested_path())
    else {
        return filter;
    };

    debug!(
        "Wrapping filter on {:?} into nested query on '{}'",
        filter.meta.key, path
    );

    let mut nested = Map::new();
    nested.insert("path".to_string(), json!(path));
    nested.insert("query".to_string(), translate_to_query(&filter));
    if let Some(ignore) = ignore_unmapped {
        nested.insert("ignore_unmapped".to_string(), json!(ignore));
    }

    Filter {
        meta: filter.meta,
        query: Some(json!({ "nested": Value::Object(nested) })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filters::{DataViewFieldBase, build_exists_filter, build_phrase_filter};

    fn view() -> DataViewBase {
        DataViewBase::new(
            "logs",
            "logs-*",
            vec![
                DataViewFieldBase::new("host", "string"),
                DataViewFieldBase::new("user.name", "string").with_nested_path("user"),
            ],
        )
    }

    #[test]
    fn test_nested_field_is_wrapped() {
        let view = view();
        let filter =
            build_phrase_filter(view.field("user.name").unwrap(), json!("alice"), &view).unwrap();

        let wrapped = handle_nested_filter(filter.clone(), Some(&view), None);
        assert_eq!(wrapped.meta, filter.meta);
        assert!(wrapped.state.is_none());
        assert_eq!(
            wrapped.query,
            Some(json!({
                "nested": {
                    "path": "user",
                    "query": { "match_phrase": { "user.name": "alice" } }
                }
            }))
        );
    }

    #[test]
    fn test_ignore_unmapped_is_passed_through() {
        let view = view();
        let filter = build_exists_filter(view.field("user.name").unwrap(), &view);
        let wrapped = handle_nested_filter(filter, Some(&view), Some(true));
        assert_eq!(
            wrapped.query.unwrap()["nested"]["ignore_unmapped"],
            json!(true)
        );
    }

    #[test]
    fn test_plain_fields_are_unchanged() {
        let view = view();
        let filter = build_exists_filter(view.field("host").unwrap(), &view);
        assert_eq!(
            handle_nested_filter(filter.clone(), Some(&view), None),
            filter
        );
        assert_eq!(handle_nested_filter(filter.clone(), None, None), filter);
    }
}
