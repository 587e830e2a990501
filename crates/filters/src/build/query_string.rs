use crate::types::{Filter, FilterMeta, FilterParams, QueryStringParams};
use serde_json::json;

/// A filter running `query` through the Lucene query-string parser.
pub fn build_query_string_filter(query: &str, index: Option<&str>) -> Filter {
    Filter {
        meta: FilterMeta {
            params: FilterParams::QueryString(QueryStringParams {
                query: query.to_string(),
            }),
            index: index.map(str::to_string),
            ..Default::default()
        },
        query: Some(json!({ "query_string": { "query": query } })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_string_filter() {
        let filter = build_query_string_filter("status:5*", Some("logs"));
        assert_eq!(
            filter.query,
            Some(json!({ "query_string": { "query": "status:5*" } }))
        );
        assert_eq!(
            filter.meta.params,
            FilterParams::QueryString(QueryStringParams {
                query: "status:5*".to_string()
            })
        );
    }
}
