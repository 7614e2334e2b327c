//! Core persistence for the AIPET design-token studio.
//! Entity stores, slot backends and the domain records they hold.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;
pub mod store;

pub use config::{StoreConfig, DEFAULT_PRINCIPAL};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::case_study::{
    AipetImplementation, CaseStudy, CaseStudyField, CaseStudyPatch, CaseStudyResults,
    ComplexityLevel,
};
pub use model::design_pattern::{DesignPattern, DesignPatternField, DesignPatternPatch, PatternType};
pub use model::exercise::{Exercise, ExerciseCategory, ExerciseField, ExerciseLevel, ExercisePatch};
pub use model::research_paper::{
    FrameworkRelevance, ResearchCategory, ResearchPaper, ResearchPaperField, ResearchPaperPatch,
};
pub use model::token::{AipetFramework, Token, TokenCategory, TokenField, TokenPatch};
pub use model::{Entity, EntityField, FieldRef, FieldValue, Record, RecordId, RecordMeta, Timestamp};
pub use service::dashboard_service::{DashboardService, DashboardStats};
pub use service::seed_service::{SeedReport, SeedService};
pub use service::token_service::{TokenSearch, TokenService};
pub use storage::{slot_key, MemorySlotStorage, SlotError, SlotResult, SlotStorage, SqliteSlotStorage};
pub use store::{Criteria, EntityStore, OrderBy, OrderByParseError, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
