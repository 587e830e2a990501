//! Helpers producing updated copies of a filter's metadata. A filter is
//! never changed in place.

use crate::types::{Filter, FilterParams, FilterState, FilterStateStore};

impl Filter {
    pub fn is_disabled(&self) -> bool {
        self.meta.disabled
    }

    pub fn is_negated(&self) -> bool {
        self.meta.negate
    }

    pub fn is_pinned(&self) -> bool {
        matches!(
            self.state,
            Some(FilterState {
                store: FilterStateStore::GlobalState
            })
        )
    }

    pub fn toggle_disabled(&self) -> Filter {
        let mut filter = self.clone();
        filter.meta.disabled = !filter.meta.disabled;
        filter
    }

    pub fn toggle_negate(&self) -> Filter {
        let mut filter = self.clone();
        filter.meta.negate = !filter.meta.negate;
        filter
    }

    pub fn with_alias(&self, alias: Option<&str>) -> Filter {
        let mut filter = self.clone();
        filter.meta.alias = alias.map(str::to_string);
        filter
    }

    /// Move the filter to the global store (pinned) or back to the app store.
    pub fn pin(&self, pinned: bool) -> Filter {
        let store = if pinned {
            FilterStateStore::GlobalState
        } else {
            FilterStateStore::AppState
        };
        let mut filter = self.clone();
        filter.state = Some(FilterState { store });
        filter
    }
}

/// The field a filter applies to. Combinators and field-less kinds have none.
pub fn get_filter_field(filter: &Filter) -> Option<&str> {
    match &filter.meta.params {
        FilterParams::And(_)
        | FilterParams::Or(_)
        | FilterParams::Combined(_)
        | FilterParams::MatchAll
        | FilterParams::QueryString(_) => None,
        FilterParams::Phrase(_)
        | FilterParams::Phrases(_)
        | FilterParams::Range(_)
        | FilterParams::Exists
        | FilterParams::Custom
        | FilterParams::Other { .. } => filter.meta.key.as_deref(),
    }
}
