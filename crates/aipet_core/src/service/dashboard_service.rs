//! Dashboard summary over all collections.

use crate::config::StoreConfig;
use crate::model::case_study::CaseStudy;
use crate::model::exercise::Exercise;
use crate::model::research_paper::ResearchPaper;
use crate::model::token::Token;
use crate::model::{Entity, FieldRef, Record};
use crate::storage::SlotStorage;
use crate::store::{EntityStore, OrderBy, StoreResult};

/// Record counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_tokens: usize,
    pub exercises: usize,
    pub research_papers: usize,
    pub case_studies: usize,
}

pub struct DashboardService<S: SlotStorage> {
    storage: S,
    config: StoreConfig,
}

impl<S: SlotStorage> DashboardService<S> {
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    pub fn with_config(storage: S, config: StoreConfig) -> Self {
        Self { storage, config }
    }

    pub fn stats(&self) -> StoreResult<DashboardStats> {
        Ok(DashboardStats {
            total_tokens: self.count::<Token>()?,
            exercises: self.count::<Exercise>()?,
            research_papers: self.count::<ResearchPaper>()?,
            case_studies: self.count::<CaseStudy>()?,
        })
    }

    /// Most recently touched tokens, newest first.
    pub fn recent_tokens(&self, limit: usize) -> StoreResult<Vec<Record<Token>>> {
        let store = self.open::<Token>()?;
        Ok(store.list(Some(&OrderBy::desc(FieldRef::UpdatedDate)), Some(limit)))
    }

    fn count<T: Entity>(&self) -> StoreResult<usize> {
        Ok(self.open::<T>()?.len())
    }

    fn open<T: Entity>(&self) -> StoreResult<EntityStore<T, &S>> {
        EntityStore::open_with_config(&self.storage, self.config.clone())
    }
}
