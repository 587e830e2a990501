use crate::{
    error::{MapperError, Result},
    mapped::MappedFilter,
};
use filters::{Filter, FilterParams};

pub fn map_query_string(filter: &Filter) -> Result<MappedFilter> {
    let FilterParams::QueryString(params) = &filter.meta.params else {
        return Err(MapperError::wrong_kind(filter));
    };

    Ok(MappedFilter::new(
        filter.meta.params.clone(),
        Some("query".to_string()),
        Some(params.query.clone()),
    ))
}
