use crate::{
    error::{MapperError, Result},
    mapped::MappedFilter,
};
use filters::{Filter, FilterParams};

pub fn map_match_all(filter: &Filter) -> Result<MappedFilter> {
    let FilterParams::MatchAll = filter.meta.params else {
        return Err(MapperError::wrong_kind(filter));
    };

    Ok(MappedFilter::new(
        FilterParams::MatchAll,
        filter.meta.key.clone(),
        filter.meta.value.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use filters::{build_exists_filter, build_match_all_filter, DataViewBase, DataViewFieldBase};

    #[test]
    fn test_map_match_all() {
        let mut filter = build_match_all_filter(None);
        filter.meta.key = Some("status".to_string());
        filter.meta.value = Some("all".to_string());

        let mapped = map_match_all(&filter).unwrap();
        assert_eq!(mapped.key.as_deref(), Some("status"));
        assert_eq!(mapped.value.as_deref(), Some("all"));

        let view = DataViewBase::new("logs", "logs-*", vec![DataViewFieldBase::new("host", "string")]);
        let exists = build_exists_filter(&view.fields[0], &view);
        assert!(matches!(map_match_all(&exists), Err(MapperError::WrongKind(_))));
    }
}
