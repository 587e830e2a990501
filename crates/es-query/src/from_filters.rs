//! Turns a list of filters into the clauses of a boolean query.

use crate::{
    config::EsQueryFiltersConfig,
    context::CompileContext,
    error::Result,
    filter_matches_index::filter_matches_index,
    handle_nested_filter::handle_nested_filter,
    migrate_filter::migrate_filter,
};
use filters::{DataViewSet, Filter, FilterParams};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, trace};

/// Body of an Elasticsearch `bool` query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoolQuery {
    #[serde(default)]
    pub must: Vec<Value>,
    #[serde(default)]
    pub filter: Vec<Value>,
    #[serde(default)]
    pub should: Vec<Value>,
    #[serde(default)]
    pub must_not: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_should_match: Option<u32>,
}

impl BoolQuery {
    /// Wrap the body into a `{ "bool": ... }` query container.
    pub fn into_query(self) -> Value {
        json!({ "bool": self })
    }

    /// No clause at all: the query matches every document.
    pub fn is_empty(&self) -> bool {
        self.must.is_empty()
            && self.filter.is_empty()
            && self.should.is_empty()
            && self.must_not.is_empty()
    }
}

/// Build the boolean query for `filters`.
///
/// Disabled filters are skipped. Negated filters go to `must_not`, the
/// others to `filter`; `must` and `should` stay empty.
pub fn build_query_from_filters<'a>(
    filters: &[Filter],
    data_views: impl Into<DataViewSet<'a>>,
    config: &EsQueryFiltersConfig,
) -> Result<BoolQuery> {
    CompileContext::new(data_views.into(), config).build_query(filters)
}

/// Same as [`build_query_from_filters`], wrapped into a query container.
pub fn compile_filters<'a>(
    filters: &[Filter],
    data_views: impl Into<DataViewSet<'a>>,
    config: &EsQueryFiltersConfig,
) -> Result<Value> {
    build_query_from_filters(filters, data_views, config).map(BoolQuery::into_query)
}

/// Fill in `query` for an AND, OR or combined filter. Other kinds are
/// returned unchanged.
pub fn compile_filter<'a>(
    filter: &Filter,
    data_views: impl Into<DataViewSet<'a>>,
    config: &EsQueryFiltersConfig,
) -> Result<Filter> {
    CompileContext::new(data_views.into(), config).compile_combinator(filter)
}

/// The query DSL of a filter: its `query`, or whatever top-level keys a
/// legacy filter carries.
pub fn translate_to_query(filter: &Filter) -> Value {
    match &filter.query {
        Some(query) => query.clone(),
        None => Value::Object(filter.legacy.clone()),
    }
}

impl CompileContext<'_> {
    pub fn build_query(&self, filters: &[Filter]) -> Result<BoolQuery> {
        self.build_query_refs(&filters.iter().collect::<Vec<_>>())
    }

    pub(crate) fn build_query_refs(&self, filters: &[&Filter]) -> Result<BoolQuery> {
        let enabled = filters
            .iter()
            .copied()
            .filter(|filter| {
                if filter.meta.disabled {
                    debug!("Skipping disabled {} filter", filter.meta.params.type_name());
                }
                !filter.meta.disabled
            })
            .collect::<Vec<_>>();

        Ok(BoolQuery {
            filter: self.to_es_queries(&enabled, false)?,
            must_not: self.to_es_queries(&enabled, true)?,
            ..Default::default()
        })
    }

    fn to_es_queries(&self, filters: &[&Filter], negate: bool) -> Result<Vec<Value>> {
        let mut queries = Vec::new();
        for filter in filters.iter().copied().filter(|f| f.meta.negate == negate) {
            let data_view = self.data_view_for(filter);
            if self.config.ignore_filter_if_field_not_in_index
                && !filter_matches_index(filter, data_view)
            {
                debug!(
                    "Ignoring filter on field {:?}, not present in its data view",
                    filter.meta.key
                );
                continue;
            }

            trace!(
                "Compiling {} filter at depth {}",
                filter.meta.params.type_name(),
                self.depth()
            );
            let migrated = migrate_filter(filter, data_view)?;
            let nested =
                handle_nested_filter(migrated, data_view, self.config.nested_ignore_unmapped);
            let compiled = self.compile_combinator(&nested)?;
            queries.push(translate_to_query(&compiled));
        }
        Ok(queries)
    }

    /// Dispatch to the handler for the filter's combinator kind.
    pub fn compile_combinator(&self, filter: &Filter) -> Result<Filter> {
        match &filter.meta.params {
            FilterParams::And(_) => self.handle_and(filter),
            FilterParams::Or(_) => self.handle_or(filter),
            FilterParams::Combined(_) => self.handle_combined(filter),
            FilterParams::Phrase(_)
            | FilterParams::Phrases(_)
            | FilterParams::Range(_)
            | FilterParams::Exists
            | FilterParams::MatchAll
            | FilterParams::QueryString(_)
            | FilterParams::Custom
            | FilterParams::Other { .. } => Ok(filter.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filters::{
        DataViewBase, DataViewFieldBase, build_exists_filter, build_match_all_filter,
        build_query_filter,
    };
    use tracing_test::traced_test;

    fn view() -> DataViewBase {
        DataViewBase::new(
            "logs",
            "logs-*",
            vec![DataViewFieldBase::new("host", "string")],
        )
    }

    #[test]
    fn test_empty_list() {
        let query =
            build_query_from_filters(&[], DataViewSet::empty(), &EsQueryFiltersConfig::default())
                .unwrap();
        assert!(query.is_empty());
        assert_eq!(
            query.into_query(),
            json!({ "bool": { "must": [], "filter": [], "should": [], "must_not": [] } })
        );
    }

    #[test]
    fn test_negated_filters_go_to_must_not() {
        let view = view();
        let exists = build_exists_filter(&view.fields[0], &view);
        let filters = vec![build_match_all_filter(None), exists.toggle_negate()];

        let query =
            build_query_from_filters(&filters, &view, &EsQueryFiltersConfig::default()).unwrap();
        assert_eq!(query.filter, vec![json!({ "match_all": {} })]);
        assert_eq!(query.must_not, vec![json!({ "exists": { "field": "host" } })]);
        assert!(query.must.is_empty());
        assert!(query.should.is_empty());
    }

    #[test]
    #[traced_test]
    fn test_disabled_filters_are_skipped() {
        let filters = vec![build_match_all_filter(None).toggle_disabled()];
        let query = build_query_from_filters(
            &filters,
            DataViewSet::empty(),
            &EsQueryFiltersConfig::default(),
        )
        .unwrap();
        assert!(query.is_empty());
        assert!(logs_contain("Skipping disabled match_all filter"));
    }

    #[test]
    fn test_ignore_filter_if_field_not_in_index() {
        let view = view();
        let missing = DataViewFieldBase::new("missing", "string");
        let filters = vec![
            build_exists_filter(&view.fields[0], &view),
            build_exists_filter(&missing, &view),
        ];

        let keep_all =
            build_query_from_filters(&filters, &view, &EsQueryFiltersConfig::default()).unwrap();
        assert_eq!(keep_all.filter.len(), 2);

        let config = EsQueryFiltersConfig::default().with_ignore_filter_if_field_not_in_index(true);
        let pruned = build_query_from_filters(&filters, &view, &config).unwrap();
        assert_eq!(pruned.filter, vec![json!({ "exists": { "field": "host" } })]);
    }

    #[test]
    fn test_legacy_filter_without_query() {
        let filter: Filter = serde_json::from_value(json!({
            "meta": { "type": "exists", "key": "host" },
            "exists": { "field": "host" }
        }))
        .unwrap();

        let query = build_query_from_filters(
            &[filter],
            DataViewSet::empty(),
            &EsQueryFiltersConfig::default(),
        )
        .unwrap();
        assert_eq!(query.filter, vec![json!({ "exists": { "field": "host" } })]);
    }

    #[test]
    fn test_custom_query_passes_through() {
        let dsl = json!({ "term": { "status": 404 } });
        let filter = build_query_filter(dsl.clone(), None, None);
        let compiled =
            compile_filters(&[filter], DataViewSet::empty(), &EsQueryFiltersConfig::default())
                .unwrap();
        assert_eq!(compiled["bool"]["filter"], json!([dsl]));
    }

    #[test]
    fn test_compile_filter_leaves_leaves_alone() {
        let filter = build_match_all_filter(Some("logs"));
        let compiled =
            compile_filter(&filter, DataViewSet::empty(), &EsQueryFiltersConfig::default())
                .unwrap();
        assert_eq!(compiled, filter);
    }

    #[test]
    #[traced_test]
    fn test_unknown_data_view_is_reported_once_per_filter() {
        let view = view();
        let mut filter = build_exists_filter(&view.fields[0], &view);
        filter.meta.index = Some("gone".to_string());

        let config = EsQueryFiltersConfig::default().with_ignore_filter_if_field_not_in_index(true);
        let query = build_query_from_filters(&[filter], &view, &config).unwrap();
        assert_eq!(query.filter, vec![json!({ "exists": { "field": "host" } })]);

        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .filter(|line| line.contains("unknown data view 'gone'"))
                .count()
            {
                1 => Ok(()),
                n => Err(format!("expected one warning, got {}", n)),
            }
        });
    }
}
