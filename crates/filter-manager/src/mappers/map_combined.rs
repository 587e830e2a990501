use crate::{
    error::{MapperError, Result},
    map_filter::map_filter_tree,
    mapped::MappedFilter,
};
use filters::{Filter, FilterItem, FilterParams};

/// Combined filter: groups are kept as groups, at any depth, and every
/// filter inside them is normalized.
pub fn map_combined(filter: &Filter) -> Result<MappedFilter> {
    let FilterParams::Combined(items) = &filter.meta.params else {
        return Err(MapperError::wrong_kind(filter));
    };

    Ok(MappedFilter::new(
        FilterParams::Combined(map_items(items)?),
        filter.meta.key.clone(),
        None,
    ))
}

fn map_items(items: &[FilterItem]) -> Result<Vec<FilterItem>> {
    items
        .iter()
        .map(|item| match item {
            FilterItem::Filter(filter) => map_filter_tree(filter).map(FilterItem::Filter),
            FilterItem::Group(group) => map_items(group).map(FilterItem::Group),
        })
        .collect()
}
