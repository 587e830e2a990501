use crate::{
    config::EsQueryFiltersConfig,
    context::CompileContext,
    error::Result,
    handle_or_filter::should_query,
};
use filters::{BooleanRelation, DataViewSet, Filter, FilterItem, FilterParams};
use tracing::debug;

/// Compile a combined filter. With relation OR every entry becomes one
/// `should` clause, a group being the AND of its members. With relation
/// AND (the default) all entries, groups flattened, are compiled like an
/// AND filter. Any other filter is returned unchanged.
pub fn handle_combined_filter<'a>(
    filter: &Filter,
    data_views: impl Into<DataViewSet<'a>>,
    config: &EsQueryFiltersConfig,
) -> Result<Filter> {
    CompileContext::new(data_views.into(), config).handle_combined(filter)
}

impl CompileContext<'_> {
    pub fn handle_combined(&self, filter: &Filter) -> Result<Filter> {
        let FilterParams::Combined(items) = &filter.meta.params else {
            return Ok(filter.clone());
        };

        let relation = filter.meta.relation.unwrap_or(BooleanRelation::And);
        debug!(
            "Compiling combined filter with {} entries, relation {:?}",
            items.len(),
            relation
        );

        let ctx = self.descend()?;
        let query = match relation {
            BooleanRelation::Or => {
                let should = items
                    .iter()
                    .map(|item| {
                        let mut members = Vec::new();
                        flatten_item(item, &mut members);
                        Ok(ctx.build_query_refs(&members)?.into_query())
                    })
                    .collect::<Result<Vec<_>>>()?;
                should_query(should)
            }
            BooleanRelation::And => {
                let mut members = Vec::new();
                for item in items {
                    flatten_item(item, &mut members);
                }
                ctx.build_query_refs(&members)?.into_query()
            }
        };

        Ok(filter.clone().with_query(query))
    }
}

fn flatten_item<'f>(item: &'f FilterItem, out: &mut Vec<&'f Filter>) {
    match item {
        FilterItem::Filter(filter) => out.push(filter),
        FilterItem::Group(group) => {
            for member in group {
                flatten_item(member, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filters::{build_combined_filter, build_match_all_filter, build_query_filter};
    use serde_json::{Value, json};

    fn term(status: u32) -> (Value, FilterItem) {
        let dsl = json!({ "term": { "status": status } });
        (dsl.clone(), build_query_filter(dsl, None, None).into())
    }

    #[test]
    fn test_or_relation_with_group() {
        let (a, a_item) = term(200);
        let (b, b_item) = term(404);
        let (c, c_item) = term(500);
        let filter = build_combined_filter(
            BooleanRelation::Or,
            vec![a_item, FilterItem::Group(vec![b_item, c_item])],
            None,
        );

        let compiled = handle_combined_filter(
            &filter,
            DataViewSet::empty(),
            &EsQueryFiltersConfig::default(),
        )
        .unwrap();
        assert_eq!(
            compiled.query,
            Some(json!({
                "bool": {
                    "should": [
                        { "bool": { "must": [], "filter": [a], "should": [], "must_not": [] } },
                        { "bool": { "must": [], "filter": [b, c], "should": [], "must_not": [] } }
                    ],
                    "minimum_should_match": 1
                }
            }))
        );
    }

    #[test]
    fn test_and_relation_flattens_groups() {
        let (a, a_item) = term(200);
        let (b, b_item) = term(404);
        let filter = build_combined_filter(
            BooleanRelation::And,
            vec![FilterItem::Group(vec![a_item]), b_item],
            None,
        );

        let compiled = handle_combined_filter(
            &filter,
            DataViewSet::empty(),
            &EsQueryFiltersConfig::default(),
        )
        .unwrap();
        assert_eq!(
            compiled.query,
            Some(json!({ "bool": { "must": [], "filter": [a, b], "should": [], "must_not": [] } }))
        );
    }

    #[test]
    fn test_missing_relation_means_and() {
        let (a, a_item) = term(200);
        let mut filter = build_combined_filter(BooleanRelation::Or, vec![a_item], None);
        filter.meta.relation = None;

        let compiled = handle_combined_filter(
            &filter,
            DataViewSet::empty(),
            &EsQueryFiltersConfig::default(),
        )
        .unwrap();
        assert_eq!(compiled.query.unwrap()["bool"]["filter"], json!([a]));
    }

    #[test]
    fn test_other_filters_are_unchanged() {
        let filter = build_match_all_filter(None);
        let compiled = handle_combined_filter(
            &filter,
            DataViewSet::empty(),
            &EsQueryFiltersConfig::default(),
        )
        .unwrap();
        assert_eq!(compiled, filter);
    }
}
