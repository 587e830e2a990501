use crate::{
    error::{MapperError, Result},
    map_filter::map_filter_tree,
    mapped::MappedFilter,
};
use filters::{Filter, FilterParams};

/// AND filter: every sub-filter is normalized in turn.
pub fn map_and(filter: &Filter) -> Result<MappedFilter> {
    let FilterParams::And(params) = &filter.meta.params else {
        return Err(MapperError::wrong_kind(filter));
    };

    let params = params
        .iter()
        .map(map_filter_tree)
        .collect::<Result<Vec<_>>>()?;

    Ok(MappedFilter::new(
        FilterParams::And(params),
        filter.meta.key.clone(),
        None,
    ))
}
