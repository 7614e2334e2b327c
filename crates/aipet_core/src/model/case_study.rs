//! Industry case study entity.
//!
//! `aipet_implementation` and `results` are nested field groups. They
//! round-trip through storage but are not addressable by filters or
//! ordering.

use crate::model::field::{EntityField, FieldValue};
use crate::model::record::Entity;
use serde::{Deserialize, Serialize};

/// How each AIPET pillar was applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AipetImplementation {
    pub agency: String,
    pub interaction: String,
    pub privacy: String,
    pub experience: String,
    pub trust: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudyResults {
    pub quantitative: Vec<String>,
    pub qualitative: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

impl ComplexityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

impl From<ComplexityLevel> for FieldValue {
    fn from(value: ComplexityLevel) -> Self {
        Self::Label(value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub title: String,
    pub company: String,
    pub challenge: String,
    pub solution_approach: String,
    pub aipet_implementation: AipetImplementation,
    pub results: CaseStudyResults,
    /// Free-text token names; not checked against the token collection.
    pub tokens_created: Vec<String>,
    pub lessons_learned: Vec<String>,
    pub complexity_level: ComplexityLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStudyField {
    Title,
    Company,
    Challenge,
    SolutionApproach,
    TokensCreated,
    LessonsLearned,
    ComplexityLevel,
}

impl EntityField for CaseStudyField {
    const ALL: &'static [Self] = &[
        Self::Title,
        Self::Company,
        Self::Challenge,
        Self::SolutionApproach,
        Self::TokensCreated,
        Self::LessonsLearned,
        Self::ComplexityLevel,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Company => "company",
            Self::Challenge => "challenge",
            Self::SolutionApproach => "solution_approach",
            Self::TokensCreated => "tokens_created",
            Self::LessonsLearned => "lessons_learned",
            Self::ComplexityLevel => "complexity_level",
        }
    }
}

/// Shallow patch: a supplied nested group replaces the whole group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseStudyPatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub challenge: Option<String>,
    pub solution_approach: Option<String>,
    pub aipet_implementation: Option<AipetImplementation>,
    pub results: Option<CaseStudyResults>,
    pub tokens_created: Option<Vec<String>>,
    pub lessons_learned: Option<Vec<String>>,
    pub complexity_level: Option<ComplexityLevel>,
}

impl Entity for CaseStudy {
    const COLLECTION: &'static str = "CaseStudy";

    type Field = CaseStudyField;
    type Patch = CaseStudyPatch;

    fn field_value(&self, field: CaseStudyField) -> FieldValue {
        match field {
            CaseStudyField::Title => self.title.as_str().into(),
            CaseStudyField::Company => self.company.as_str().into(),
            CaseStudyField::Challenge => self.challenge.as_str().into(),
            CaseStudyField::SolutionApproach => self.solution_approach.as_str().into(),
            CaseStudyField::TokensCreated => self.tokens_created.clone().into(),
            CaseStudyField::LessonsLearned => self.lessons_learned.clone().into(),
            CaseStudyField::ComplexityLevel => self.complexity_level.into(),
        }
    }

    fn apply_patch(&mut self, patch: CaseStudyPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(challenge) = patch.challenge {
            self.challenge = challenge;
        }
        if let Some(solution_approach) = patch.solution_approach {
            self.solution_approach = solution_approach;
        }
        if let Some(aipet_implementation) = patch.aipet_implementation {
            self.aipet_implementation = aipet_implementation;
        }
        if let Some(results) = patch.results {
            self.results = results;
        }
        if let Some(tokens_created) = patch.tokens_created {
            self.tokens_created = tokens_created;
        }
        if let Some(lessons_learned) = patch.lessons_learned {
            self.lessons_learned = lessons_learned;
        }
        if let Some(complexity_level) = patch.complexity_level {
            self.complexity_level = complexity_level;
        }
    }
}
