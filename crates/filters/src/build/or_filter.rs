use super::empty::build_empty_filter;
use crate::types::{Filter, FilterParams};

/// Builds an OR filter: a filter whose sub-filters are combined in an OR
/// query. An empty list is allowed.
pub fn build_or_filter(filters: Vec<Filter>, alias: Option<&str>) -> Filter {
    let mut filter = build_empty_filter(false, None);
    filter.meta.alias = alias.map(str::to_string);
    filter.meta.params = FilterParams::Or(filters);
    filter
}
