use crate::{
    error::{MapperError, Result},
    mapped::{MappedFilter, display_value},
};
use filters::{Filter, FilterParams};

/// Range filter, displayed as `<from> to <to>` with open ends shown as
/// infinities.
pub fn map_range(filter: &Filter) -> Result<MappedFilter> {
    let FilterParams::Range(params) = &filter.meta.params else {
        return Err(MapperError::wrong_kind(filter));
    };

    let from = params
        .gte
        .as_ref()
        .or(params.gt.as_ref())
        .map_or_else(|| "-Infinity".to_string(), display_value);
    let to = params
        .lte
        .as_ref()
        .or(params.lt.as_ref())
        .map_or_else(|| "Infinity".to_string(), display_value);

    Ok(MappedFilter::new(
        filter.meta.params.clone(),
        filter.meta.key.clone(),
        Some(format!("{} to {}", from, to)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use filters::{DataViewBase, DataViewFieldBase, RangeParams, build_range_filter};
    use serde_json::json;

    #[test]
    fn test_map_range() {
        let view = DataViewBase::new("logs", "logs-*", vec![DataViewFieldBase::new("bytes", "number")]);

        let bounded = build_range_filter(
            &view.fields[0],
            RangeParams {
                gte: Some(json!(1)),
                lt: Some(json!(10)),
                ..Default::default()
            },
            &view,
        )
        .unwrap();
        let mapped = map_range(&bounded).unwrap();
        assert_eq!(mapped.key.as_deref(), Some("bytes"));
        assert_eq!(mapped.value.as_deref(), Some("1 to 10"));

        let open = build_range_filter(
            &view.fields[0],
            RangeParams {
                gt: Some(json!(5)),
                ..Default::default()
            },
            &view,
        )
        .unwrap();
        assert_eq!(map_range(&open).unwrap().value.as_deref(), Some("5 to Infinity"));
    }
}
