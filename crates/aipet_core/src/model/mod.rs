//! Record model and domain entities.
//!
//! # Responsibility
//! - Define the store-owned record envelope (`Record`, `RecordMeta`).
//! - Define typed field descriptors used by filtering and ordering.
//! - Define the AIPET domain entities persisted by the application.
//!
//! # Invariants
//! - Base attributes live only in `RecordMeta` and are assigned by the store.
//! - Entity patches can only touch domain fields.

pub mod case_study;
pub mod design_pattern;
pub mod exercise;
pub mod field;
pub mod record;
pub mod research_paper;
pub mod token;

pub use field::{EntityField, FieldRef, FieldValue};
pub use record::{Entity, Record, RecordId, RecordMeta, Timestamp};
