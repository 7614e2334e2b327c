//! Typed field descriptors and comparable field values.
//!
//! Filtering and ordering address fields through a per-entity `Field` enum
//! instead of runtime string lookup; `FieldValue` is the common currency both
//! operations compare in.

use crate::model::record::Timestamp;
use std::fmt::Debug;

/// Comparable snapshot of one field of a record.
///
/// Ordering is total: values of the same variant compare naturally
/// (integers numerically, text lexicographically, timestamps
/// chronologically, `false < true`, lists element-wise); values of different
/// variants compare by variant position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Timestamp(Timestamp),
    /// Enumerated value (category, level, ...). Matches a typed label by
    /// exact equality and text like any other string field.
    Label(&'static str),
    /// Free text. Matches by case-insensitive substring containment.
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Returns whether a record value satisfies a filter criterion.
    ///
    /// A text criterion matches any string-valued field (free text or label)
    /// by case-insensitive containment. A typed label criterion matches
    /// exactly; everything else is equality.
    pub fn matches(&self, criterion: &FieldValue) -> bool {
        match (self, criterion) {
            (Self::Text(value), Self::Text(needle)) => contains_ignore_case(value, needle),
            (Self::Label(value), Self::Text(needle)) => contains_ignore_case(value, needle),
            (Self::Text(value), Self::Label(expected)) => value.as_str() == *expected,
            (value, expected) => value == expected,
        }
    }
}

fn contains_ignore_case(value: &str, needle: &str) -> bool {
    value.to_lowercase().contains(&needle.to_lowercase())
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Timestamp> for FieldValue {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Descriptor enum naming the addressable domain fields of one entity.
pub trait EntityField: Copy + Eq + Debug + 'static {
    /// Every addressable field, in declaration order.
    const ALL: &'static [Self];

    /// Persisted field name.
    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// Reference to either a base attribute or a domain field of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef<F> {
    Id,
    CreatedDate,
    UpdatedDate,
    CreatedBy,
    Entity(F),
}

impl<F: EntityField> FieldRef<F> {
    /// Resolves a persisted field name, base attributes first.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "created_date" => Some(Self::CreatedDate),
            "updated_date" => Some(Self::UpdatedDate),
            "created_by" => Some(Self::CreatedBy),
            other => F::from_name(other).map(Self::Entity),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::CreatedDate => "created_date",
            Self::UpdatedDate => "updated_date",
            Self::CreatedBy => "created_by",
            Self::Entity(field) => field.name(),
        }
    }
}

impl<F: EntityField> From<F> for FieldRef<F> {
    fn from(value: F) -> Self {
        Self::Entity(value)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldValue;

    #[test]
    fn text_matches_case_insensitive_substring() {
        let value = FieldValue::from("color.Primary.500");
        assert!(value.matches(&FieldValue::from("prim")));
        assert!(value.matches(&FieldValue::from("COLOR")));
        assert!(!value.matches(&FieldValue::from("secondary")));
    }

    #[test]
    fn label_matches_text_by_substring() {
        let value = FieldValue::Label("multi-framework");
        assert!(value.matches(&FieldValue::from("multi-framework")));
        assert!(value.matches(&FieldValue::from("MULTI")));
        assert!(value.matches(&FieldValue::from("Framework")));
        assert!(!value.matches(&FieldValue::from("agency")));
    }

    #[test]
    fn label_matches_typed_label_exactly() {
        let value = FieldValue::Label("agentic_ai");
        assert!(value.matches(&FieldValue::Label("agentic_ai")));
        assert!(!value.matches(&FieldValue::Label("agentic")));
        assert!(!value.matches(&FieldValue::Label("agentive_ux")));
    }

    #[test]
    fn non_text_values_use_equality() {
        assert!(FieldValue::Integer(2024).matches(&FieldValue::Integer(2024)));
        assert!(!FieldValue::Integer(2024).matches(&FieldValue::from("2024")));
        let list = FieldValue::List(vec!["a".to_string(), "b".to_string()]);
        assert!(list.matches(&list.clone()));
    }

    #[test]
    fn ordering_is_natural_within_variant() {
        assert!(FieldValue::Integer(9) < FieldValue::Integer(10));
        assert!(FieldValue::from("apple") < FieldValue::from("banana"));
        assert!(FieldValue::Bool(false) < FieldValue::Bool(true));
    }
}
