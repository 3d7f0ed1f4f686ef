//! Repository for the `cars` table.

use async_trait::async_trait;
use drivethrough_core::error::{CoreError, CoreResult};
use drivethrough_core::models::{Car, CarRequest};
use drivethrough_core::store::CarStore;
use drivethrough_core::types::{parse_id, DbId};
use sqlx::{PgConnection, PgPool};

use crate::models::car::{CarEngineRow, CarRow};
use crate::transaction::{begin, finish};

const ENTITY: &str = "Car";

/// Column list for queries against `cars` alone.
const COLUMNS: &str = "id, name, year, brand, fuel_type, engine_id, price, created_at, updated_at";

/// Column list for `cars c JOIN engines e` queries.
const JOINED_COLUMNS: &str = "c.id, c.name, c.year, c.brand, c.fuel_type, c.engine_id, \
     c.price, c.created_at, c.updated_at, e.displacement, e.no_of_cylinders, e.car_range";

/// Postgres-backed [`CarStore`].
#[derive(Clone)]
pub struct PgCarStore {
    pool: PgPool,
}

impl PgCarStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find(conn: &mut PgConnection, id: DbId) -> CoreResult<Option<Car>> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM cars c
             JOIN engines e ON e.id = c.engine_id
             WHERE c.id = $1"
        );
        let row = sqlx::query_as::<_, CarEngineRow>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(CoreError::persistence)?;
        Ok(row.map(Car::from))
    }

    async fn list_by_brand(
        conn: &mut PgConnection,
        brand: &str,
        include_engine: bool,
    ) -> CoreResult<Vec<Car>> {
        let cars: Vec<Car> = if include_engine {
            let query = format!(
                "SELECT {JOINED_COLUMNS} FROM cars c
                 JOIN engines e ON e.id = c.engine_id
                 WHERE c.brand = $1
                 ORDER BY c.name ASC, c.id ASC"
            );
            sqlx::query_as::<_, CarEngineRow>(&query)
                .bind(brand)
                .fetch_all(conn)
                .await
                .map_err(CoreError::persistence)?
                .into_iter()
                .map(Car::from)
                .collect()
        } else {
            let query = format!(
                "SELECT {COLUMNS} FROM cars
                 WHERE brand = $1
                 ORDER BY name ASC, id ASC"
            );
            sqlx::query_as::<_, CarRow>(&query)
                .bind(brand)
                .fetch_all(conn)
                .await
                .map_err(CoreError::persistence)?
                .into_iter()
                .map(Car::from)
                .collect()
        };
        Ok(cars)
    }

    /// Insert, then read the row back so timestamps and the engine come from
    /// the database.
    async fn insert(conn: &mut PgConnection, input: &CarRequest) -> CoreResult<Car> {
        let id = DbId::new_v4();
        sqlx::query(
            "INSERT INTO cars (id, name, year, brand, fuel_type, engine_id, price)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.year)
        .bind(&input.brand)
        .bind(&input.fuel_type)
        .bind(input.engine.engine_id)
        .bind(input.price)
        .execute(&mut *conn)
        .await
        .map_err(CoreError::persistence)?;

        Self::find(conn, id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    async fn replace(conn: &mut PgConnection, id: DbId, input: &CarRequest) -> CoreResult<Car> {
        let result = sqlx::query(
            "UPDATE cars SET
                name = $2,
                year = $3,
                brand = $4,
                fuel_type = $5,
                engine_id = $6,
                price = $7,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.year)
        .bind(&input.brand)
        .bind(&input.fuel_type)
        .bind(input.engine.engine_id)
        .bind(input.price)
        .execute(&mut *conn)
        .await
        .map_err(CoreError::persistence)?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound { entity: ENTITY, id });
        }

        Self::find(conn, id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    async fn remove(conn: &mut PgConnection, id: DbId) -> CoreResult<Car> {
        let existing = Self::find(&mut *conn, id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(CoreError::persistence)?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound { entity: ENTITY, id });
        }
        Ok(existing)
    }
}

#[async_trait]
impl CarStore for PgCarStore {
    async fn get_by_id(&self, id: &str) -> CoreResult<Option<Car>> {
        let id = parse_id(id)?;
        let mut tx = begin(&self.pool).await?;
        let result = Self::find(&mut tx, id).await;
        finish(tx, result).await
    }

    async fn get_by_brand(&self, brand: &str, include_engine: bool) -> CoreResult<Vec<Car>> {
        let mut tx = begin(&self.pool).await?;
        let result = Self::list_by_brand(&mut tx, brand, include_engine).await;
        finish(tx, result).await
    }

    async fn create(&self, input: &CarRequest) -> CoreResult<Car> {
        let mut tx = begin(&self.pool).await?;
        let result = Self::insert(&mut tx, input).await;
        let car = finish(tx, result).await?;
        tracing::debug!(car_id = %car.id, engine_id = %input.engine.engine_id, "Car created");
        Ok(car)
    }

    async fn update(&self, id: &str, input: &CarRequest) -> CoreResult<Car> {
        let id = parse_id(id)?;
        let mut tx = begin(&self.pool).await?;
        let result = Self::replace(&mut tx, id, input).await;
        let car = finish(tx, result).await?;
        tracing::debug!(car_id = %id, "Car updated");
        Ok(car)
    }

    async fn delete(&self, id: &str) -> CoreResult<Car> {
        let id = parse_id(id)?;
        let mut tx = begin(&self.pool).await?;
        let result = Self::remove(&mut tx, id).await;
        let car = finish(tx, result).await?;
        tracing::debug!(car_id = %id, "Car deleted");
        Ok(car)
    }
}
