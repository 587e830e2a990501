use crate::{
    error::{MapperError, Result},
    mapped::{MappedFilter, display_value},
};
use filters::{Filter, FilterParams};

pub fn map_phrase(filter: &Filter) -> Result<MappedFilter> {
    let FilterParams::Phrase(params) = &filter.meta.params else {
        return Err(MapperError::wrong_kind(filter));
    };

    Ok(MappedFilter::new(
        filter.meta.params.clone(),
        filter.meta.key.clone(),
        Some(display_value(&params.query)),
    ))
}
