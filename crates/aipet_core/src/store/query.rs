//! Ordering and filter criteria.

use crate::model::{Entity, EntityField, FieldRef, FieldValue, Record};
use std::cmp::Reverse;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Sort instruction for `list`/`filter`.
///
/// Parses from the textual form used by callers: `"updated_date"` sorts
/// ascending, `"-updated_date"` descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy<F> {
    pub field: FieldRef<F>,
    pub descending: bool,
}

impl<F: EntityField> OrderBy<F> {
    pub fn asc(field: impl Into<FieldRef<F>>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    pub fn desc(field: impl Into<FieldRef<F>>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }
}

impl<F: EntityField> FromStr for OrderBy<F> {
    type Err = OrderByParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let (descending, name) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let field = FieldRef::from_name(name).ok_or_else(|| OrderByParseError {
            field: name.to_string(),
        })?;
        Ok(Self { field, descending })
    }
}

impl<F: EntityField> Display for OrderBy<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.descending {
            write!(f, "-")?;
        }
        write!(f, "{}", self.field.name())
    }
}

/// Order-by text named a field the entity does not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByParseError {
    pub field: String,
}

impl Display for OrderByParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown order-by field `{}`", self.field)
    }
}

impl Error for OrderByParseError {}

/// Conjunction of per-field match criteria.
///
/// An empty criteria set matches every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria<F> {
    clauses: Vec<(FieldRef<F>, FieldValue)>,
}

impl<F> Default for Criteria<F> {
    fn default() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }
}

impl<F: EntityField> Criteria<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one clause; see [`FieldValue::matches`] for match rules.
    pub fn field(mut self, field: impl Into<FieldRef<F>>, value: impl Into<FieldValue>) -> Self {
        self.clauses.push((field.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub(crate) fn matches<T>(&self, record: &Record<T>) -> bool
    where
        T: Entity<Field = F>,
    {
        self.clauses
            .iter()
            .all(|(field, expected)| record.value(*field).matches(expected))
    }
}

/// Sorts (stable) and truncates a result set in place.
pub(crate) fn shape_results<T: Entity>(
    records: &mut Vec<Record<T>>,
    order_by: Option<&OrderBy<T::Field>>,
    limit: Option<usize>,
) {
    if let Some(order) = order_by {
        if order.descending {
            records.sort_by_cached_key(|record| Reverse(record.value(order.field)));
        } else {
            records.sort_by_cached_key(|record| record.value(order.field));
        }
    }

    if let Some(limit) = limit {
        records.truncate(limit);
    }
}
