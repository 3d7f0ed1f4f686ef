//! Domain core for the DriveThrough car catalogue.
//!
//! Holds the entity types, request validation, the error taxonomy, and the
//! store/service seams. Nothing in this crate knows about SQL or HTTP.

pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;
