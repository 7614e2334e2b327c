//! Research paper entity.

use crate::model::field::{EntityField, FieldValue};
use crate::model::record::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResearchCategory {
    AgentiveUx,
    AgenticAi,
    DesignTokens,
    Hci,
    TrustBuilding,
    ContextEngineering,
}

impl ResearchCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AgentiveUx => "agentive_ux",
            Self::AgenticAi => "agentic_ai",
            Self::DesignTokens => "design_tokens",
            Self::Hci => "hci",
            Self::TrustBuilding => "trust_building",
            Self::ContextEngineering => "context_engineering",
        }
    }
}

impl From<ResearchCategory> for FieldValue {
    fn from(value: ResearchCategory) -> Self {
        Self::Label(value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameworkRelevance {
    Agency,
    Interaction,
    Privacy,
    Experience,
    Trust,
    #[serde(rename = "Multi-Framework")]
    MultiFramework,
}

impl FrameworkRelevance {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Agency => "Agency",
            Self::Interaction => "Interaction",
            Self::Privacy => "Privacy",
            Self::Experience => "Experience",
            Self::Trust => "Trust",
            Self::MultiFramework => "Multi-Framework",
        }
    }
}

impl From<FrameworkRelevance> for FieldValue {
    fn from(value: FrameworkRelevance) -> Self {
        Self::Label(value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchPaper {
    pub title: String,
    pub authors: Vec<String>,
    pub journal: String,
    pub year: i64,
    pub category: ResearchCategory,
    pub framework_relevance: FrameworkRelevance,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub key_insights: Vec<String>,
    pub doi: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResearchPaperField {
    Title,
    Authors,
    Journal,
    Year,
    Category,
    FrameworkRelevance,
    Abstract,
    KeyInsights,
    Doi,
    Url,
}

impl EntityField for ResearchPaperField {
    const ALL: &'static [Self] = &[
        Self::Title,
        Self::Authors,
        Self::Journal,
        Self::Year,
        Self::Category,
        Self::FrameworkRelevance,
        Self::Abstract,
        Self::KeyInsights,
        Self::Doi,
        Self::Url,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Authors => "authors",
            Self::Journal => "journal",
            Self::Year => "year",
            Self::Category => "category",
            Self::FrameworkRelevance => "framework_relevance",
            Self::Abstract => "abstract",
            Self::KeyInsights => "key_insights",
            Self::Doi => "doi",
            Self::Url => "url",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResearchPaperPatch {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub journal: Option<String>,
    pub year: Option<i64>,
    pub category: Option<ResearchCategory>,
    pub framework_relevance: Option<FrameworkRelevance>,
    pub summary: Option<String>,
    pub key_insights: Option<Vec<String>>,
    pub doi: Option<String>,
    pub url: Option<String>,
}

impl Entity for ResearchPaper {
    const COLLECTION: &'static str = "ResearchPaper";

    type Field = ResearchPaperField;
    type Patch = ResearchPaperPatch;

    fn field_value(&self, field: ResearchPaperField) -> FieldValue {
        match field {
            ResearchPaperField::Title => self.title.as_str().into(),
            ResearchPaperField::Authors => self.authors.clone().into(),
            ResearchPaperField::Journal => self.journal.as_str().into(),
            ResearchPaperField::Year => self.year.into(),
            ResearchPaperField::Category => self.category.into(),
            ResearchPaperField::FrameworkRelevance => self.framework_relevance.into(),
            ResearchPaperField::Abstract => self.summary.as_str().into(),
            ResearchPaperField::KeyInsights => self.key_insights.clone().into(),
            ResearchPaperField::Doi => self.doi.as_str().into(),
            ResearchPaperField::Url => self.url.as_str().into(),
        }
    }

    fn apply_patch(&mut self, patch: ResearchPaperPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(authors) = patch.authors {
            self.authors = authors;
        }
        if let Some(journal) = patch.journal {
            self.journal = journal;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(framework_relevance) = patch.framework_relevance {
            self.framework_relevance = framework_relevance;
        }
        if let Some(summary) = patch.summary {
            self.summary = summary;
        }
        if let Some(key_insights) = patch.key_insights {
            self.key_insights = key_insights;
        }
        if let Some(doi) = patch.doi {
            self.doi = doi;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
    }
}
