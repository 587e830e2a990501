pub mod error;
pub mod map_filter;
pub mod mapped;
pub mod mappers;

pub use error::{MapperError, Result};
pub use map_filter::{MAPPERS, Mapper, map_filter, map_filter_tree};
pub use mapped::MappedFilter;
pub use mappers::{
    map_and::map_and, map_combined::map_combined, map_default::map_default,
    map_exists::map_exists, map_match_all::map_match_all, map_or::map_or,
    map_phrase::map_phrase, map_phrases::map_phrases, map_query_string::map_query_string,
    map_range::map_range,
};
