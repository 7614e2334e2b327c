//! Use-case services over entity stores.
//!
//! # Responsibility
//! - Orchestrate store calls into the flows pages perform (seeding empty
//!   collections, dashboard summaries, token editing).
//! - Keep callers decoupled from slot and store wiring.
//!
//! # Invariants
//! - Services open a fresh store per call, so they always observe the latest
//!   persisted state of the shared backend.

pub mod dashboard_service;
pub mod seed_data;
pub mod seed_service;
pub mod token_service;
