//! Slot storage backends.
//!
//! # Responsibility
//! - Define the keyed string-slot contract that entity stores persist into.
//! - Provide an in-memory backend (tests, ephemeral sessions) and a SQLite
//!   backend (durable across process restarts).
//!
//! # Invariants
//! - One slot holds one whole collection; backends never interpret values.
//! - A failed `write` leaves the previous slot value in place.

mod memory;
mod slot;
mod sqlite;

pub use memory::MemorySlotStorage;
pub use slot::{slot_key, SlotError, SlotResult, SlotStorage, DEFAULT_KEY_PREFIX};
pub use sqlite::SqliteSlotStorage;
