//! AI UX design pattern entity.

use crate::model::field::{EntityField, FieldValue};
use crate::model::record::Entity;
use crate::model::token::AipetFramework;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    CanvasWorkflow,
    VoiceInterface,
    GenerativeInterface,
    IterativePrompting,
    ContextualUi,
    AiAssistant,
    MultiAgentWorkflow,
}

impl PatternType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CanvasWorkflow => "canvas_workflow",
            Self::VoiceInterface => "voice_interface",
            Self::GenerativeInterface => "generative_interface",
            Self::IterativePrompting => "iterative_prompting",
            Self::ContextualUi => "contextual_ui",
            Self::AiAssistant => "ai_assistant",
            Self::MultiAgentWorkflow => "multi_agent_workflow",
        }
    }
}

impl From<PatternType> for FieldValue {
    fn from(value: PatternType) -> Self {
        Self::Label(value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignPattern {
    pub name: String,
    pub pattern_type: PatternType,
    pub description: String,
    pub when_to_use: String,
    pub aipet_focus: AipetFramework,
    pub design_considerations: Vec<String>,
    pub token_examples: Vec<String>,
    pub implementation_guide: String,
    pub case_studies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignPatternField {
    Name,
    PatternType,
    Description,
    WhenToUse,
    AipetFocus,
    DesignConsiderations,
    TokenExamples,
    ImplementationGuide,
    CaseStudies,
}

impl EntityField for DesignPatternField {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::PatternType,
        Self::Description,
        Self::WhenToUse,
        Self::AipetFocus,
        Self::DesignConsiderations,
        Self::TokenExamples,
        Self::ImplementationGuide,
        Self::CaseStudies,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PatternType => "pattern_type",
            Self::Description => "description",
            Self::WhenToUse => "when_to_use",
            Self::AipetFocus => "aipet_focus",
            Self::DesignConsiderations => "design_considerations",
            Self::TokenExamples => "token_examples",
            Self::ImplementationGuide => "implementation_guide",
            Self::CaseStudies => "case_studies",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignPatternPatch {
    pub name: Option<String>,
    pub pattern_type: Option<PatternType>,
    pub description: Option<String>,
    pub when_to_use: Option<String>,
    pub aipet_focus: Option<AipetFramework>,
    pub design_considerations: Option<Vec<String>>,
    pub token_examples: Option<Vec<String>>,
    pub implementation_guide: Option<String>,
    pub case_studies: Option<Vec<String>>,
}

impl Entity for DesignPattern {
    const COLLECTION: &'static str = "DesignPattern";

    type Field = DesignPatternField;
    type Patch = DesignPatternPatch;

    fn field_value(&self, field: DesignPatternField) -> FieldValue {
        match field {
            DesignPatternField::Name => self.name.as_str().into(),
            DesignPatternField::PatternType => self.pattern_type.into(),
            DesignPatternField::Description => self.description.as_str().into(),
            DesignPatternField::WhenToUse => self.when_to_use.as_str().into(),
            DesignPatternField::AipetFocus => self.aipet_focus.into(),
            DesignPatternField::DesignConsiderations => self.design_considerations.clone().into(),
            DesignPatternField::TokenExamples => self.token_examples.clone().into(),
            DesignPatternField::ImplementationGuide => self.implementation_guide.as_str().into(),
            DesignPatternField::CaseStudies => self.case_studies.clone().into(),
        }
    }

    fn apply_patch(&mut self, patch: DesignPatternPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(pattern_type) = patch.pattern_type {
            self.pattern_type = pattern_type;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(when_to_use) = patch.when_to_use {
            self.when_to_use = when_to_use;
        }
        if let Some(aipet_focus) = patch.aipet_focus {
            self.aipet_focus = aipet_focus;
        }
        if let Some(design_considerations) = patch.design_considerations {
            self.design_considerations = design_considerations;
        }
        if let Some(token_examples) = patch.token_examples {
            self.token_examples = token_examples;
        }
        if let Some(implementation_guide) = patch.implementation_guide {
            self.implementation_guide = implementation_guide;
        }
        if let Some(case_studies) = patch.case_studies {
            self.case_studies = case_studies;
        }
    }
}
