//! First-run seeding of curated collections.
//!
//! # Invariants
//! - A collection is seeded only while it is empty; seeding never touches a
//!   collection that already holds records.
//! - Samples go through `EntityStore::create`, so they get ordinary ids and
//!   timestamps.

use crate::config::StoreConfig;
use crate::model::case_study::CaseStudy;
use crate::model::design_pattern::DesignPattern;
use crate::model::exercise::Exercise;
use crate::model::research_paper::ResearchPaper;
use crate::model::Entity;
use crate::service::seed_data::{
    sample_case_studies, sample_design_patterns, sample_exercises, sample_research_papers,
};
use crate::storage::SlotStorage;
use crate::store::{EntityStore, StoreResult};
use log::info;

/// Number of records inserted per collection by one seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub exercises: usize,
    pub research_papers: usize,
    pub case_studies: usize,
    pub design_patterns: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.exercises + self.research_papers + self.case_studies + self.design_patterns
    }
}

pub struct SeedService<S: SlotStorage> {
    storage: S,
    config: StoreConfig,
}

impl<S: SlotStorage> SeedService<S> {
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    pub fn with_config(storage: S, config: StoreConfig) -> Self {
        Self { storage, config }
    }

    /// Seeds every curated collection that is still empty.
    pub fn seed_all(&self) -> StoreResult<SeedReport> {
        Ok(SeedReport {
            exercises: self.seed_exercises()?,
            research_papers: self.seed_research_papers()?,
            case_studies: self.seed_case_studies()?,
            design_patterns: self.seed_design_patterns()?,
        })
    }

    pub fn seed_exercises(&self) -> StoreResult<usize> {
        self.seed_collection::<Exercise>(sample_exercises)
    }

    pub fn seed_research_papers(&self) -> StoreResult<usize> {
        self.seed_collection::<ResearchPaper>(sample_research_papers)
    }

    pub fn seed_case_studies(&self) -> StoreResult<usize> {
        self.seed_collection::<CaseStudy>(sample_case_studies)
    }

    pub fn seed_design_patterns(&self) -> StoreResult<usize> {
        self.seed_collection::<DesignPattern>(sample_design_patterns)
    }

    fn seed_collection<T: Entity>(&self, samples: fn() -> Vec<T>) -> StoreResult<usize> {
        let mut store = EntityStore::<T, _>::open_with_config(&self.storage, self.config.clone())?;
        if !store.is_empty() {
            info!(
                "event=seed module=service status=skipped collection={} existing={}",
                T::COLLECTION,
                store.len()
            );
            return Ok(0);
        }

        let samples = samples();
        let inserted = samples.len();
        for sample in samples {
            store.create(sample)?;
        }

        info!(
            "event=seed module=service status=ok collection={} inserted={}",
            T::COLLECTION,
            inserted
        );
        Ok(inserted)
    }
}
