//! Engine entity and DTO.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// An engine as stored in the `engines` table.
///
/// Also used as the embedded engine reference inside a car request, which is
/// why every field defaults: a missing field deserializes to its zero value
/// and is reported by validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Engine {
    pub engine_id: DbId,
    pub displacement: i64,
    #[serde(rename = "noOfCylinders")]
    pub no_of_cylinders: i64,
    #[serde(rename = "carRange")]
    pub car_range: i64,
}

/// DTO for creating an engine or replacing an existing one's figures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineRequest {
    pub displacement: i64,
    #[serde(rename = "noOfCylinders")]
    pub no_of_cylinders: i64,
    #[serde(rename = "carRange")]
    pub car_range: i64,
}

impl Engine {
    /// Build the entity that results from applying `input` under `engine_id`.
    pub fn from_request(engine_id: DbId, input: &EngineRequest) -> Self {
        Self {
            engine_id,
            displacement: input.displacement,
            no_of_cylinders: input.no_of_cylinders,
            car_range: input.car_range,
        }
    }
}
