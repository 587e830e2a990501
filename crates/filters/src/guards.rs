//! Kind checks that work on typed filters as well as on arbitrary
//! filter-like JSON.
//!
//! None of the checks panic: a missing filter, a JSON `null`, a value
//! without `meta` or with an unknown `meta.type` simply is not of any kind.

use crate::types::{Filter, FilterItem, FilterMeta, FilterType};
use serde_json::Value;

pub trait FilterLike {
    /// The `meta.type` of this value, if it has a recognizable one.
    fn filter_type(&self) -> Option<FilterType>;
}

impl FilterLike for Filter {
    fn filter_type(&self) -> Option<FilterType> {
        Some(self.meta.filter_type())
    }
}

impl FilterLike for FilterMeta {
    fn filter_type(&self) -> Option<FilterType> {
        Some(FilterMeta::filter_type(self))
    }
}

impl FilterLike for FilterItem {
    fn filter_type(&self) -> Option<FilterType> {
        match self {
            FilterItem::Filter(filter) => FilterLike::filter_type(filter),
            FilterItem::Group(_) => None,
        }
    }
}

impl FilterLike for Value {
    fn filter_type(&self) -> Option<FilterType> {
        self.get("meta")?.get("type")?.as_str()?.parse().ok()
    }
}

impl<T: FilterLike> FilterLike for Option<T> {
    fn filter_type(&self) -> Option<FilterType> {
        self.as_ref().and_then(FilterLike::filter_type)
    }
}

impl<T: FilterLike + ?Sized> FilterLike for &T {
    fn filter_type(&self) -> Option<FilterType> {
        (**self).filter_type()
    }
}

fn is_kind<F: FilterLike + ?Sized>(filter: &F, kind: FilterType) -> bool {
    filter.filter_type() == Some(kind)
}

pub fn is_and_filter<F: FilterLike + ?Sized>(filter: &F) -> bool {
    is_kind(filter, FilterType::And)
}

pub fn is_or_filter<F: FilterLike + ?Sized>(filter: &F) -> bool {
    is_kind(filter, FilterType::Or)
}

pub fn is_combined_filter<F: FilterLike + ?Sized>(filter: &F) -> bool {
    is_kind(filter, FilterType::Combined)
}

pub fn is_phrase_filter<F: FilterLike + ?Sized>(filter: &F) -> bool {
    is_kind(filter, FilterType::Phrase)
}

pub fn is_phrases_filter<F: FilterLike + ?Sized>(filter: &F) -> bool {
    is_kind(filter, FilterType::Phrases)
}

pub fn is_range_filter<F: FilterLike + ?Sized>(filter: &F) -> bool {
    is_kind(filter, FilterType::Range)
}

pub fn is_exists_filter<F: FilterLike + ?Sized>(filter: &F) -> bool {
    is_kind(filter, FilterType::Exists)
}

pub fn is_match_all_filter<F: FilterLike + ?Sized>(filter: &F) -> bool {
    is_kind(filter, FilterType::MatchAll)
}

pub fn is_query_string_filter<F: FilterLike + ?Sized>(filter: &F) -> bool {
    is_kind(filter, FilterType::QueryString)
}
