//! Car entity, DTO, and the fuel type vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::engine::Engine;
use crate::types::{DbId, Timestamp};
use crate::validation::ValidationError;

/// A car row from the `cars` table, optionally carrying its engine.
///
/// `engine` is `None` when the car was listed without joining the
/// `engines` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: DbId,
    pub name: String,
    pub year: String,
    pub brand: String,
    pub fuel_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<Engine>,
    pub price: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing a car.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarRequest {
    pub name: String,
    /// Model year as a numeric string, e.g. `"2020"`.
    pub year: String,
    pub brand: String,
    /// One of [`FuelType`]'s names, matched case-sensitively.
    pub fuel_type: String,
    pub engine: Engine,
    pub price: f64,
}

/// Accepted fuel types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Petrol,
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Hybrid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fuel| fuel.as_str() == s)
            .ok_or(ValidationError::InvalidFuelType)
    }
}
