use crate::{
    error::{MapperError, Result},
    map_filter::map_filter_tree,
    mapped::MappedFilter,
};
use filters::{Filter, FilterParams};

/// OR filter: every sub-filter is normalized in turn.
pub fn map_or(filter: &Filter) -> Result<MappedFilter> {
    let FilterParams::Or(params) = &filter.meta.params else {
        return Err(MapperError::wrong_kind(filter));
    };

    let params = params
        .iter()
        .map(map_filter_tree)
        .collect::<Result<Vec<_>>>()?;

    Ok(MappedFilter::new(
        FilterParams::Or(params),
        filter.meta.key.clone(),
        None,
    ))
}
