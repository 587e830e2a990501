use crate::{
    error::{MapperError, Result},
    mapped::MappedFilter,
};
use filters::{Filter, FilterParams};

pub fn map_exists(filter: &Filter) -> Result<MappedFilter> {
    let FilterParams::Exists = filter.meta.params else {
        return Err(MapperError::wrong_kind(filter));
    };

    Ok(MappedFilter::new(
        FilterParams::Exists,
        filter.meta.key.clone(),
        Some("exists".to_string()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use filters::build_match_all_filter;

    #[test]
    fn test_map_exists_rejects_other_kinds() {
        let filter = build_match_all_filter(None);
        let err = map_exists(&filter).unwrap_err();
        assert_eq!(err.rejected(), Some(&filter));
        assert_eq!(err.to_string(), "Mapper does not apply to match_all filter");
    }
}
