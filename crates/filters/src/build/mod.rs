pub mod and_filter;
pub mod combined;
pub mod custom;
pub mod empty;
pub mod exists;
pub mod match_all;
pub mod or_filter;
pub mod phrase;
pub mod phrases;
pub mod query_string;
pub mod range;
