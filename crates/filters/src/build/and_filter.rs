use super::empty::build_empty_filter;
use crate::types::{Filter, FilterParams};

/// Builds an AND filter: a filter whose sub-filters are combined in an AND
/// query. An empty list is allowed.
pub fn build_and_filter(filters: Vec<Filter>, alias: Option<&str>) -> Filter {
    let mut filter = build_empty_filter(false, None);
    filter.meta.alias = alias.map(str::to_string);
    filter.meta.params = FilterParams::And(filters);
    filter
}
