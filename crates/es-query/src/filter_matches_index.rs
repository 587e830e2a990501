use filters::{DataViewBase, Filter, FilterParams};

/// Whether `filter` applies to `data_view`: true unless the filter names a
/// field the data view does not have.
///
/// Filters without a data view or without a key always match. Custom
/// filters carry arbitrary DSL and always match. Combinators match too;
/// their sub-filters are checked when they are compiled.
pub fn filter_matches_index(filter: &Filter, data_view: Option<&DataViewBase>) -> bool {
    let (Some(view), Some(key)) = (data_view, filter.meta.key.as_deref()) else {
        return true;
    };

    match &filter.meta.params {
        FilterParams::Custom
        | FilterParams::And(_)
        | FilterParams::Or(_)
        | FilterParams::Combined(_) => true,
        FilterParams::Phrase(_)
        | FilterParams::Phrases(_)
        | FilterParams::Range(_)
        | FilterParams::Exists
        | FilterParams::MatchAll
        | FilterParams::QueryString(_)
        | FilterParams::Other { .. } => view.has_field(key),
    }
}
