//! Design token entity.
//!
//! A token is a named design decision (a color, a spacing step, or an AI
//! behaviour signal) tagged with the AIPET pillar it serves.

use crate::model::field::{EntityField, FieldValue};
use crate::model::record::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    Color,
    Typography,
    Spacing,
    Radius,
    Shadow,
    Agency,
    Interaction,
    Privacy,
    Experience,
    Trust,
}

impl TokenCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Typography => "typography",
            Self::Spacing => "spacing",
            Self::Radius => "radius",
            Self::Shadow => "shadow",
            Self::Agency => "agency",
            Self::Interaction => "interaction",
            Self::Privacy => "privacy",
            Self::Experience => "experience",
            Self::Trust => "trust",
        }
    }
}

impl From<TokenCategory> for FieldValue {
    fn from(value: TokenCategory) -> Self {
        Self::Label(value.as_str())
    }
}

/// AIPET pillar a token or pattern focuses on.
///
/// Serialized with the capitalized names used in stored documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AipetFramework {
    Agency,
    Interaction,
    Privacy,
    Experience,
    Trust,
    Traditional,
}

impl AipetFramework {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Agency => "Agency",
            Self::Interaction => "Interaction",
            Self::Privacy => "Privacy",
            Self::Experience => "Experience",
            Self::Trust => "Trust",
            Self::Traditional => "Traditional",
        }
    }
}

impl From<AipetFramework> for FieldValue {
    fn from(value: AipetFramework) -> Self {
        Self::Label(value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub category: TokenCategory,
    pub value: String,
    pub description: String,
    pub figma_key: String,
    pub aipet_framework: AipetFramework,
    pub usage_context: String,
    pub css_variable: String,
}

impl Token {
    /// Creates a token with empty descriptive fields.
    ///
    /// `css_variable` is derived from the dotted name (`color.primary` ->
    /// `--color-primary`), matching what the token editor pre-fills.
    pub fn new(
        name: impl Into<String>,
        category: TokenCategory,
        value: impl Into<String>,
        aipet_framework: AipetFramework,
    ) -> Self {
        let name = name.into();
        let css_variable = css_variable_for(&name);
        Self {
            name,
            category,
            value: value.into(),
            description: String::new(),
            figma_key: String::new(),
            aipet_framework,
            usage_context: String::new(),
            css_variable,
        }
    }
}

/// Converts a dotted token name into a CSS custom property name.
pub fn css_variable_for(name: &str) -> String {
    format!("--{}", name.trim().replace('.', "-"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenField {
    Name,
    Category,
    Value,
    Description,
    FigmaKey,
    AipetFramework,
    UsageContext,
    CssVariable,
}

impl EntityField for TokenField {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::Category,
        Self::Value,
        Self::Description,
        Self::FigmaKey,
        Self::AipetFramework,
        Self::UsageContext,
        Self::CssVariable,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Value => "value",
            Self::Description => "description",
            Self::FigmaKey => "figma_key",
            Self::AipetFramework => "aipet_framework",
            Self::UsageContext => "usage_context",
            Self::CssVariable => "css_variable",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPatch {
    pub name: Option<String>,
    pub category: Option<TokenCategory>,
    pub value: Option<String>,
    pub description: Option<String>,
    pub figma_key: Option<String>,
    pub aipet_framework: Option<AipetFramework>,
    pub usage_context: Option<String>,
    pub css_variable: Option<String>,
}

impl From<Token> for TokenPatch {
    /// Full replacement of every domain field, as the token editor saves.
    fn from(token: Token) -> Self {
        Self {
            name: Some(token.name),
            category: Some(token.category),
            value: Some(token.value),
            description: Some(token.description),
            figma_key: Some(token.figma_key),
            aipet_framework: Some(token.aipet_framework),
            usage_context: Some(token.usage_context),
            css_variable: Some(token.css_variable),
        }
    }
}

impl Entity for Token {
    const COLLECTION: &'static str = "Token";

    type Field = TokenField;
    type Patch = TokenPatch;

    fn field_value(&self, field: TokenField) -> FieldValue {
        match field {
            TokenField::Name => self.name.as_str().into(),
            TokenField::Category => self.category.into(),
            TokenField::Value => self.value.as_str().into(),
            TokenField::Description => self.description.as_str().into(),
            TokenField::FigmaKey => self.figma_key.as_str().into(),
            TokenField::AipetFramework => self.aipet_framework.into(),
            TokenField::UsageContext => self.usage_context.as_str().into(),
            TokenField::CssVariable => self.css_variable.as_str().into(),
        }
    }

    fn apply_patch(&mut self, patch: TokenPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(figma_key) = patch.figma_key {
            self.figma_key = figma_key;
        }
        if let Some(aipet_framework) = patch.aipet_framework {
            self.aipet_framework = aipet_framework;
        }
        if let Some(usage_context) = patch.usage_context {
            self.usage_context = usage_context;
        }
        if let Some(css_variable) = patch.css_variable {
            self.css_variable = css_variable;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{css_variable_for, AipetFramework, Token, TokenCategory, TokenField, TokenPatch};
    use crate::model::{Entity, EntityField, FieldValue};

    #[test]
    fn new_token_derives_css_variable() {
        let token = Token::new(
            "color.primary.500",
            TokenCategory::Color,
            "#3B82F6",
            AipetFramework::Traditional,
        );
        assert_eq!(token.css_variable, "--color-primary-500");
        assert_eq!(css_variable_for(" spacing.md "), "--spacing-md");
    }

    #[test]
    fn field_names_resolve_both_ways() {
        for field in TokenField::ALL {
            assert_eq!(TokenField::from_name(field.name()), Some(*field));
        }
        assert_eq!(TokenField::from_name("unknown"), None);
    }

    #[test]
    fn enums_serialize_with_stored_spelling() {
        let token = Token::new("a", TokenCategory::Typography, "1", AipetFramework::Agency);
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["category"], "typography");
        assert_eq!(json["aipet_framework"], "Agency");
        assert_eq!(
            token.field_value(TokenField::Category),
            FieldValue::Label("typography")
        );
    }

    #[test]
    fn patch_overwrites_only_supplied_fields() {
        let mut token = Token::new("a", TokenCategory::Color, "#000", AipetFramework::Trust);
        token.description = "kept".to_string();

        token.apply_patch(TokenPatch {
            value: Some("#fff".to_string()),
            ..TokenPatch::default()
        });

        assert_eq!(token.value, "#fff");
        assert_eq!(token.description, "kept");
        assert_eq!(token.name, "a");
    }
}
