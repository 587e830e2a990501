use crate::types::{Filter, FilterMeta, FilterParams};
use serde_json::json;

pub fn build_match_all_filter(index: Option<&str>) -> Filter {
    Filter {
        meta: FilterMeta {
            params: FilterParams::MatchAll,
            index: index.map(str::to_string),
            ..Default::default()
        },
        query: Some(json!({ "match_all": {} })),
        ..Default::default()
    }
}
