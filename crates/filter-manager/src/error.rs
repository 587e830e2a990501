use filters::{Filter, FilterType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapperError {
    /// The mapper does not handle this kind of filter. Carries the rejected
    /// filter so the next mapper in the chain can try it.
    #[error("Mapper does not apply to {} filter", .0.meta.params.type_name())]
    WrongKind(Box<Filter>),

    #[error("No mappings have been found for {0} filter")]
    NoMapping(FilterType),
}

impl MapperError {
    pub fn wrong_kind(filter: &Filter) -> Self {
        MapperError::WrongKind(Box::new(filter.clone()))
    }

    /// The rejected filter of a [`MapperError::WrongKind`].
    pub fn rejected(&self) -> Option<&Filter> {
        match self {
            MapperError::WrongKind(filter) => Some(filter),
            MapperError::NoMapping(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MapperError>;
