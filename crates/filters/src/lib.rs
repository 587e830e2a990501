pub mod build;
pub mod data_view;
pub mod error;
pub mod guards;
pub mod meta;
pub mod types;

pub use build::{
    and_filter::build_and_filter,
    combined::build_combined_filter,
    custom::{build_custom_filter, build_query_filter},
    empty::build_empty_filter,
    exists::build_exists_filter,
    match_all::build_match_all_filter,
    or_filter::build_or_filter,
    phrase::build_phrase_filter,
    phrases::build_phrases_filter,
    query_string::build_query_string_filter,
    range::build_range_filter,
};
pub use data_view::{DataViewBase, DataViewFieldBase, DataViewSet};
pub use error::{FilterError, Result};
pub use guards::{
    FilterLike, is_and_filter, is_combined_filter, is_exists_filter, is_match_all_filter,
    is_or_filter, is_phrase_filter, is_phrases_filter, is_query_string_filter, is_range_filter,
};
pub use meta::get_filter_field;
pub use types::{
    BooleanRelation, Filter, FilterItem, FilterMeta, FilterParams, FilterState, FilterStateStore,
    FilterType, PhraseParams, QueryStringParams, RangeParams,
};
