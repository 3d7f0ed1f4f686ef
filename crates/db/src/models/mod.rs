//! Row types mapped from query results.
//!
//! Rows stay inside this crate's vocabulary and convert into the entity types
//! from `drivethrough_core::models` before leaving a store.

pub mod car;
pub mod engine;
