use crate::{
    data_view::{DataViewBase, DataViewFieldBase},
    types::{Filter, FilterMeta, FilterParams},
};
use serde_json::json;

pub fn build_exists_filter(field: &DataViewFieldBase, data_view: &DataViewBase) -> Filter {
    Filter {
        meta: FilterMeta {
            params: FilterParams::Exists,
            index: data_view.id.clone(),
            key: Some(field.name.clone()),
            ..Default::default()
        },
        query: Some(json!({ "exists": { "field": field.name } })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_exists_filter() {
        let view = DataViewBase::new("logs", "logs-*", vec![DataViewFieldBase::new("host", "string")]);
        let filter = build_exists_filter(&view.fields[0], &view);
        assert_eq!(filter.query, Some(json!({ "exists": { "field": "host" } })));
        assert_eq!(filter.meta.key.as_deref(), Some("host"));
        assert_eq!(filter.meta.index.as_deref(), Some("logs"));
    }
}
