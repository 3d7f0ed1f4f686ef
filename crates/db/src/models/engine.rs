//! Row shape of the `engines` table.

use drivethrough_core::models::Engine;
use drivethrough_core::types::DbId;
use sqlx::FromRow;

/// An engine row from the `engines` table.
#[derive(Debug, Clone, FromRow)]
pub struct EngineRow {
    pub id: DbId,
    pub displacement: i64,
    pub no_of_cylinders: i64,
    pub car_range: i64,
}

impl From<EngineRow> for Engine {
    fn from(row: EngineRow) -> Self {
        Self {
            engine_id: row.id,
            displacement: row.displacement,
            no_of_cylinders: row.no_of_cylinders,
            car_range: row.car_range,
        }
    }
}
