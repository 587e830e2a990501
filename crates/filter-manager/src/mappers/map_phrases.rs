use crate::{
    error::{MapperError, Result},
    mapped::{MappedFilter, display_value},
};
use filters::{Filter, FilterParams};

pub fn map_phrases(filter: &Filter) -> Result<MappedFilter> {
    let FilterParams::Phrases(params) = &filter.meta.params else {
        return Err(MapperError::wrong_kind(filter));
    };

    let value = params
        .iter()
        .map(display_value)
        .collect::<Vec<_>>()
        .join(", ");

    Ok(MappedFilter::new(
        filter.meta.params.clone(),
        filter.meta.key.clone(),
        Some(value),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use filters::{DataViewBase, DataViewFieldBase, build_phrases_filter};
    use serde_json::json;

    #[test]
    fn test_map_phrases() {
        let view = DataViewBase::new("logs", "logs-*", vec![DataViewFieldBase::new("host", "string")]);
        let filter =
            build_phrases_filter(&view.fields[0], vec![json!("web-1"), json!("web-2")], &view)
                .unwrap();

        let mapped = map_phrases(&filter).unwrap();
        assert_eq!(mapped.key.as_deref(), Some("host"));
        assert_eq!(mapped.value.as_deref(), Some("web-1, web-2"));
    }
}
