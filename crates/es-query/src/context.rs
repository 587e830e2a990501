use crate::{
    config::EsQueryFiltersConfig,
    error::{EsQueryError, Result},
};
use filters::{DataViewBase, DataViewSet, Filter};
use tracing::warn;

/// Inputs shared by every step of one compilation call, plus the current
/// combinator nesting depth.
#[derive(Debug, Clone, Copy)]
pub struct CompileContext<'a> {
    pub data_views: DataViewSet<'a>,
    pub config: &'a EsQueryFiltersConfig,
    depth: usize,
}

impl<'a> CompileContext<'a> {
    pub fn new(data_views: DataViewSet<'a>, config: &'a EsQueryFiltersConfig) -> Self {
        CompileContext {
            data_views,
            config,
            depth: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Context for the sub-filters of a combinator one level down.
    pub fn descend(&self) -> Result<Self> {
        let depth = self.depth + 1;
        if let Some(limit) = self.config.max_depth
            && depth > limit
        {
            return Err(EsQueryError::DepthExceeded { limit });
        }

        Ok(CompileContext { depth, ..*self })
    }

    /// The data view a filter was built against.
    pub fn data_view_for(&self, filter: &Filter) -> Option<&'a DataViewBase> {
        let index = filter.meta.index.as_deref();
        if let Some(id) = index
            && !self.data_views.is_empty()
            && !self.data_views.contains(id)
        {
            warn!("Filter references unknown data view '{}', using the first one", id);
        }
        self.data_views.find(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descend_respects_limit() {
        let config = EsQueryFiltersConfig::default().with_max_depth(1);
        let ctx = CompileContext::new(DataViewSet::empty(), &config);

        let child = ctx.descend().unwrap();
        assert_eq!(child.depth(), 1);
        assert!(matches!(
            child.descend(),
            Err(EsQueryError::DepthExceeded { limit: 1 })
        ));
    }

    #[test]
    fn test_descend_unlimited() {
        let config = EsQueryFiltersConfig::default();
        let mut ctx = CompileContext::new(DataViewSet::empty(), &config);
        for _ in 0..64 {
            ctx = ctx.descend().unwrap();
        }
        assert_eq!(ctx.depth(), 64);
    }
}
