use super::empty::build_empty_filter;
use crate::{
    data_view::DataViewBase,
    types::{BooleanRelation, Filter, FilterItem, FilterParams},
};

/// Builds a combined filter joining `filters` with `relation`. Nested
/// groups inside `filters` are joined with AND.
pub fn build_combined_filter(
    relation: BooleanRelation,
    filters: Vec<FilterItem>,
    data_view: Option<&DataViewBase>,
) -> Filter {
    let index = data_view.and_then(|view| view.id.as_deref());
    let mut filter = build_empty_filter(false, index);
    filter.meta.relation = Some(relation);
    filter.meta.params = FilterParams::Combined(filters);
    filter
}
