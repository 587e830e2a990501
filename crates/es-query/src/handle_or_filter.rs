use crate::{
    config::EsQueryFiltersConfig,
    context::CompileContext,
    error::Result,
};
use filters::{DataViewSet, Filter, FilterParams};
use serde_json::{Value, json};
use tracing::debug;

/// Compile an OR filter: each sub-filter becomes its own boolean query, and
/// the query matches when at least one of them does. Any other filter is
/// returned unchanged.
///
/// An empty OR has no `should` clause that could be satisfied, so it
/// matches no document. This differs from an empty AND.
pub fn handle_or_filter<'a>(
    filter: &Filter,
    data_views: impl Into<DataViewSet<'a>>,
    config: &EsQueryFiltersConfig,
) -> Result<Filter> {
    CompileContext::new(data_views.into(), config).handle_or(filter)
}

impl CompileContext<'_> {
    pub fn handle_or(&self, filter: &Filter) -> Result<Filter> {
        let FilterParams::Or(params) = &filter.meta.params else {
            return Ok(filter.clone());
        };

        debug!("Compiling OR filter with {} sub-filters", params.len());
        let ctx = self.descend()?;
        let should = params
            .iter()
            .map(|sub| Ok(ctx.build_query(std::slice::from_ref(sub))?.into_query()))
            .collect::<Result<Vec<_>>>()?;

        Ok(filter.clone().with_query(should_query(should)))
    }
}

/// `bool` query matching when at least one of `should` matches.
pub(crate) fn should_query(should: Vec<Value>) -> Value {
    json!({
        "bool": {
            "should": should,
            "minimum_should_match": 1
        }
    })
}
