use crate::{
    config::EsQueryFiltersConfig,
    context::CompileContext,
    error::Result,
};
use filters::{DataViewSet, Filter, FilterParams};
use tracing::debug;

/// Compile an AND filter: its sub-filters become a single boolean query
/// stored in `query`. Any other filter is returned unchanged.
///
/// An empty AND compiles to a boolean query without clauses, which matches
/// every document.
pub fn handle_and_filter<'a>(
    filter: &Filter,
    data_views: impl Into<DataViewSet<'a>>,
    config: &EsQueryFiltersConfig,
) -> Result<Filter> {
    CompileContext::new(data_views.into(), config).handle_and(filter)
}

impl CompileContext<'_> {
    pub fn handle_and(&self, filter: &Filter) -> Result<Filter> {
        let FilterParams::And(params) = &filter.meta.params else {
            return Ok(filter.clone());
        };

        debug!("Compiling AND filter with {} sub-filters", params.len());
        let query = self.descend()?.build_query(params)?;
        Ok(filter.clone().with_query(query.into_query()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EsQueryError;
    use filters::{build_and_filter, build_match_all_filter, build_query_filter};
    use serde_json::json;

    #[test]
    fn test_and_filter_compiles_to_bool_filter() {
        let term = json!({ "term": { "status": 200 } });
        let filter = build_and_filter(
            vec![
                build_query_filter(term.clone(), None, None),
                build_match_all_filter(None).toggle_negate(),
            ],
            None,
        );

        let compiled =
            handle_and_filter(&filter, DataViewSet::empty(), &EsQueryFiltersConfig::default())
                .unwrap();
        assert_eq!(
            compiled.query,
            Some(json!({
                "bool": {
                    "must": [],
                    "filter": [term],
                    "should": [],
                    "must_not": [{ "match_all": {} }]
                }
            }))
        );
        assert_eq!(compiled.meta, filter.meta);
    }

    #[test]
    fn test_empty_and_filter() {
        let filter = build_and_filter(vec![], None);
        let compiled =
            handle_and_filter(&filter, DataViewSet::empty(), &EsQueryFiltersConfig::default())
                .unwrap();
        assert_eq!(
            compiled.query,
            Some(json!({ "bool": { "must": [], "filter": [], "should": [], "must_not": [] } }))
        );
    }

    #[test]
    fn test_other_filters_are_unchanged() {
        let filter = build_match_all_filter(None);
        let compiled =
            handle_and_filter(&filter, DataViewSet::empty(), &EsQueryFiltersConfig::default())
                .unwrap();
        assert_eq!(compiled, filter);
    }

    #[test]
    fn test_depth_limit() {
        let tree = build_and_filter(vec![build_and_filter(vec![], None)], None);
        let config = EsQueryFiltersConfig::default().with_max_depth(1);
        assert!(matches!(
            handle_and_filter(&tree, DataViewSet::empty(), &config),
            Err(EsQueryError::DepthExceeded { limit: 1 })
        ));

        let config = EsQueryFiltersConfig::default().with_max_depth(2);
        assert!(handle_and_filter(&tree, DataViewSet::empty(), &config).is_ok());
    }
}
