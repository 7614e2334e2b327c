//! Generic entity store over one named collection.
//!
//! # Responsibility
//! - Provide list/filter/create/update/delete for any `Entity` type.
//! - Keep the in-memory collection and its persisted slot in lockstep.
//!
//! # Invariants
//! - Ids are unique within a collection.
//! - A mutation is visible in memory only after its slot write succeeded.
//! - Store instances never share memory; they converge through the slot.

mod entity_store;
mod error;
mod query;

pub use entity_store::EntityStore;
pub use error::{StoreError, StoreResult};
pub use query::{Criteria, OrderBy, OrderByParseError};
