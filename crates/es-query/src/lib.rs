pub mod config;
pub mod context;
pub mod error;
pub mod eval;
pub mod filter_matches_index;
pub mod from_filters;
pub mod handle_and_filter;
pub mod handle_combined_filter;
pub mod handle_nested_filter;
pub mod handle_or_filter;
pub mod migrate_filter;

pub use config::EsQueryFiltersConfig;
pub use context::CompileContext;
pub use error::{EsQueryError, Result};
pub use eval::evaluate;
pub use filter_matches_index::filter_matches_index;
pub use from_filters::{BoolQuery, build_query_from_filters, compile_filter, compile_filters};
pub use handle_and_filter::handle_and_filter;
pub use handle_combined_filter::handle_combined_filter;
pub use handle_nested_filter::handle_nested_filter;
pub use handle_or_filter::handle_or_filter;
pub use migrate_filter::migrate_filter;
