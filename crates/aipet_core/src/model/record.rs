//! Store-owned record envelope.
//!
//! # Invariants
//! - `id`, `created_date` and `created_by` never change after creation.
//! - `updated_date >= created_date`.
//! - Serialized form is one flat field mapping: base attributes side by side
//!   with domain fields.

use crate::model::field::{EntityField, FieldRef, FieldValue};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Collection-scoped record identifier, e.g. `Token_1718000000000_k3j9x0a2b`.
pub type RecordId = String;

/// UTC instant, persisted as an RFC 3339 string.
pub type Timestamp = DateTime<Utc>;

/// Base attributes assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
    pub id: RecordId,
    pub created_date: Timestamp,
    pub updated_date: Timestamp,
    pub created_by: String,
}

/// One stored entity: base attributes plus domain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Record<T> {
    pub fn id(&self) -> &str {
        &self.meta.id
    }
}

impl<T: Entity> Record<T> {
    /// Reads a base attribute or domain field as a comparable value.
    pub fn value(&self, field: FieldRef<T::Field>) -> FieldValue {
        match field {
            FieldRef::Id => FieldValue::Text(self.meta.id.clone()),
            FieldRef::CreatedDate => FieldValue::Timestamp(self.meta.created_date),
            FieldRef::UpdatedDate => FieldValue::Timestamp(self.meta.updated_date),
            FieldRef::CreatedBy => FieldValue::Text(self.meta.created_by.clone()),
            FieldRef::Entity(field) => self.data.field_value(field),
        }
    }
}

/// Domain type persisted in its own collection.
///
/// Implementors carry only domain fields; the store wraps them in
/// [`Record`]. `Patch` mirrors the domain fields with `Option`s so updates
/// are shallow merges that cannot reach base attributes.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Collection name; also the slot key suffix and id prefix.
    const COLLECTION: &'static str;

    type Field: EntityField;
    type Patch: Default;

    fn field_value(&self, field: Self::Field) -> FieldValue;

    /// Overwrites every field set in `patch`, keeping the rest.
    fn apply_patch(&mut self, patch: Self::Patch);
}
