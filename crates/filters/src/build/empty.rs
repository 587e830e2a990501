use crate::types::{Filter, FilterMeta, FilterState, FilterStateStore};

/// The template every filter starts from: enabled, not negated, no alias
/// and no compiled query. Pinned filters live in the global store.
pub fn build_empty_filter(is_pinned: bool, index: Option<&str>) -> Filter {
    let store = if is_pinned {
        FilterStateStore::GlobalState
    } else {
        FilterStateStore::AppState
    };

    Filter {
        meta: FilterMeta {
            disabled: false,
            negate: false,
            alias: None,
            index: index.map(str::to_string),
            ..Default::default()
        },
        query: None,
        state: Some(FilterState { store }),
        ..Default::default()
    }
}
