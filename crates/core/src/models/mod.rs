//! Entity types and request DTOs.

pub mod car;
pub mod engine;

pub use car::{Car, CarRequest, FuelType};
pub use engine::{Engine, EngineRequest};
