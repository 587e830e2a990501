use crate::{
    error::{MapperError, Result},
    mapped::MappedFilter,
    mappers::{
        map_and::map_and, map_combined::map_combined, map_default::map_default,
        map_exists::map_exists, map_match_all::map_match_all, map_or::map_or,
        map_phrase::map_phrase, map_phrases::map_phrases, map_query_string::map_query_string,
        map_range::map_range,
    },
};
use filters::Filter;
use tracing::debug;

pub type Mapper = fn(&Filter) -> Result<MappedFilter>;

/// The mapper chain, tried in order. `map_default` comes last since it
/// accepts any filter that carries query DSL.
pub const MAPPERS: [(&str, Mapper); 10] = [
    ("map_and", map_and),
    ("map_or", map_or),
    ("map_combined", map_combined),
    ("map_match_all", map_match_all),
    ("map_phrase", map_phrase),
    ("map_phrases", map_phrases),
    ("map_range", map_range),
    ("map_exists", map_exists),
    ("map_query_string", map_query_string),
    ("map_default", map_default),
];

/// Run the mapper chain on `filter`. A mapper rejecting the filter's kind
/// hands it on to the next one; any other error stops the chain.
pub fn map_filter(filter: &Filter) -> Result<MappedFilter> {
    for (name, mapper) in MAPPERS {
        match mapper(filter) {
            Ok(mapped) => {
                debug!("Mapped {} filter with {}", filter.meta.params.type_name(), name);
                return Ok(mapped);
            }
            Err(MapperError::WrongKind(_)) => continue,
            Err(e) => return Err(e),
        }
    }

    Err(MapperError::NoMapping(filter.filter_type()))
}

/// A copy of `filter` whose meta carries the mapped `type`, `key`, `value`
/// and `params`. Sub-filters of combinators are normalized as well.
pub fn map_filter_tree(filter: &Filter) -> Result<Filter> {
    let mapped = map_filter(filter)?;

    let mut normalized = filter.clone();
    normalized.meta.params = mapped.params;
    normalized.meta.key = mapped.key;
    normalized.meta.value = mapped.value;
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use filters::{
        DataViewBase, DataViewFieldBase, FilterParams, FilterType, build_and_filter,
        build_empty_filter, build_exists_filter, build_query_filter,
    };
    use serde_json::json;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_chain_falls_through_to_matching_mapper() {
        let view = DataViewBase::new("logs", "logs-*", vec![DataViewFieldBase::new("host", "string")]);
        let filter = build_exists_filter(&view.fields[0], &view);

        let mapped = map_filter(&filter).unwrap();
        assert_eq!(mapped.filter_type(), FilterType::Exists);
        assert_eq!(mapped.key.as_deref(), Some("host"));
        assert_eq!(mapped.value.as_deref(), Some("exists"));
        assert!(logs_contain("Mapped exists filter with map_exists"));
    }

    #[test]
    fn test_custom_filter_uses_default_mapper() {
        let filter = build_query_filter(json!({ "term": { "a": 1 } }), None, None);
        let mapped = map_filter(&filter).unwrap();
        assert_eq!(mapped.params, FilterParams::Custom);
        assert_eq!(mapped.key.as_deref(), Some("query"));
        assert_eq!(mapped.value.as_deref(), Some(r#"{"term":{"a":1}}"#));
    }

    #[test]
    fn test_exhausted_chain() {
        let filter = build_empty_filter(false, None);
        assert!(matches!(
            map_filter(&filter),
            Err(MapperError::NoMapping(FilterType::Custom))
        ));
    }

    #[test]
    fn test_map_filter_tree_keeps_other_meta() {
        let view = DataViewBase::new("logs", "logs-*", vec![DataViewFieldBase::new("host", "string")]);
        let filter = build_and_filter(vec![build_exists_filter(&view.fields[0], &view)], Some("has host"))
            .toggle_negate();

        let normalized = map_filter_tree(&filter).unwrap();
        assert_eq!(normalized.meta.alias.as_deref(), Some("has host"));
        assert!(normalized.meta.negate);
        assert!(!normalized.meta.disabled);
        assert_eq!(normalized.state, filter.state);

        let FilterParams::And(params) = &normalized.meta.params else {
            panic!("expected AND params");
        };
        assert_eq!(params[0].meta.value.as_deref(), Some("exists"));
    }
}
