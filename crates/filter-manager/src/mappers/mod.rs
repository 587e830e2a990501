pub mod map_and;
pub mod map_combined;
pub mod map_default;
pub mod map_exists;
pub mod map_match_all;
pub mod map_or;
pub mod map_phrase;
pub mod map_phrases;
pub mod map_query_string;
pub mod map_range;
