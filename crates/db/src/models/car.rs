//! Row shapes of the `cars` table, with and without the joined engine.

use drivethrough_core::models::{Car, Engine};
use drivethrough_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A car row from the `cars` table.
#[derive(Debug, Clone, FromRow)]
pub struct CarRow {
    pub id: DbId,
    pub name: String,
    pub year: String,
    pub brand: String,
    pub fuel_type: String,
    pub engine_id: DbId,
    pub price: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A car row joined with its engine's figures.
#[derive(Debug, Clone, FromRow)]
pub struct CarEngineRow {
    #[sqlx(flatten)]
    pub car: CarRow,
    pub displacement: i64,
    pub no_of_cylinders: i64,
    pub car_range: i64,
}

impl CarRow {
    /// Convert into the entity, attaching `engine` if it was loaded.
    pub fn into_car(self, engine: Option<Engine>) -> Car {
        Car {
            id: self.id,
            name: self.name,
            year: self.year,
            brand: self.brand,
            fuel_type: self.fuel_type,
            engine,
            price: self.price,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        row.into_car(None)
    }
}

impl From<CarEngineRow> for Car {
    fn from(row: CarEngineRow) -> Self {
        let engine = Engine {
            engine_id: row.car.engine_id,
            displacement: row.displacement,
            no_of_cylinders: row.no_of_cylinders,
            car_range: row.car_range,
        };
        row.car.into_car(Some(engine))
    }
}
