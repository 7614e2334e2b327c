//! Guided exercise entity.

use crate::model::field::{EntityField, FieldValue};
use crate::model::record::Entity;
use serde::{Deserialize, Serialize};

/// Difficulty level.
///
/// `Expert` is not offered by the level picker but appears in curated
/// content, so stored data may carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExerciseLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

impl From<ExerciseLevel> for FieldValue {
    fn from(value: ExerciseLevel) -> Self {
        Self::Label(value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Foundation,
    AipetFramework,
    PatternLibrary,
    Workflow,
}

impl ExerciseCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Foundation => "foundation",
            Self::AipetFramework => "aipet_framework",
            Self::PatternLibrary => "pattern_library",
            Self::Workflow => "workflow",
        }
    }
}

impl From<ExerciseCategory> for FieldValue {
    fn from(value: ExerciseCategory) -> Self {
        Self::Label(value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub title: String,
    pub level: ExerciseLevel,
    pub category: ExerciseCategory,
    pub description: String,
    pub instructions: String,
    pub expected_tokens: Vec<String>,
    pub figma_template_url: String,
    pub learning_objectives: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseField {
    Title,
    Level,
    Category,
    Description,
    Instructions,
    ExpectedTokens,
    FigmaTemplateUrl,
    LearningObjectives,
}

impl EntityField for ExerciseField {
    const ALL: &'static [Self] = &[
        Self::Title,
        Self::Level,
        Self::Category,
        Self::Description,
        Self::Instructions,
        Self::ExpectedTokens,
        Self::FigmaTemplateUrl,
        Self::LearningObjectives,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Level => "level",
            Self::Category => "category",
            Self::Description => "description",
            Self::Instructions => "instructions",
            Self::ExpectedTokens => "expected_tokens",
            Self::FigmaTemplateUrl => "figma_template_url",
            Self::LearningObjectives => "learning_objectives",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExercisePatch {
    pub title: Option<String>,
    pub level: Option<ExerciseLevel>,
    pub category: Option<ExerciseCategory>,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub expected_tokens: Option<Vec<String>>,
    pub figma_template_url: Option<String>,
    pub learning_objectives: Option<Vec<String>>,
}

impl Entity for Exercise {
    const COLLECTION: &'static str = "Exercise";

    type Field = ExerciseField;
    type Patch = ExercisePatch;

    fn field_value(&self, field: ExerciseField) -> FieldValue {
        match field {
            ExerciseField::Title => self.title.as_str().into(),
            ExerciseField::Level => self.level.into(),
            ExerciseField::Category => self.category.into(),
            ExerciseField::Description => self.description.as_str().into(),
            ExerciseField::Instructions => self.instructions.as_str().into(),
            ExerciseField::ExpectedTokens => self.expected_tokens.clone().into(),
            ExerciseField::FigmaTemplateUrl => self.figma_template_url.as_str().into(),
            ExerciseField::LearningObjectives => self.learning_objectives.clone().into(),
        }
    }

    fn apply_patch(&mut self, patch: ExercisePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(instructions) = patch.instructions {
            self.instructions = instructions;
        }
        if let Some(expected_tokens) = patch.expected_tokens {
            self.expected_tokens = expected_tokens;
        }
        if let Some(figma_template_url) = patch.figma_template_url {
            self.figma_template_url = figma_template_url;
        }
        if let Some(learning_objectives) = patch.learning_objectives {
            self.learning_objectives = learning_objectives;
        }
    }
}
