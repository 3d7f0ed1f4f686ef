//! Repository for the `engines` table.

use async_trait::async_trait;
use drivethrough_core::error::{CoreError, CoreResult};
use drivethrough_core::models::{Engine, EngineRequest};
use drivethrough_core::store::EngineStore;
use drivethrough_core::types::{parse_id, DbId};
use sqlx::{PgConnection, PgPool};

use crate::models::engine::EngineRow;
use crate::transaction::{begin, finish};

const ENTITY: &str = "Engine";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, displacement, no_of_cylinders, car_range";

/// Postgres-backed [`EngineStore`].
#[derive(Clone)]
pub struct PgEngineStore {
    pool: PgPool,
}

impl PgEngineStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find(conn: &mut PgConnection, id: DbId) -> CoreResult<Option<Engine>> {
        let query = format!("SELECT {COLUMNS} FROM engines WHERE id = $1");
        let row = sqlx::query_as::<_, EngineRow>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(CoreError::persistence)?;
        Ok(row.map(Engine::from))
    }

    async fn insert(conn: &mut PgConnection, input: &EngineRequest) -> CoreResult<Engine> {
        let engine = Engine::from_request(DbId::new_v4(), input);
        sqlx::query(
            "INSERT INTO engines (id, displacement, no_of_cylinders, car_range)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(engine.engine_id)
        .bind(engine.displacement)
        .bind(engine.no_of_cylinders)
        .bind(engine.car_range)
        .execute(conn)
        .await
        .map_err(CoreError::persistence)?;
        Ok(engine)
    }

    async fn replace(
        conn: &mut PgConnection,
        id: DbId,
        input: &EngineRequest,
    ) -> CoreResult<Engine> {
        let result = sqlx::query(
            "UPDATE engines SET
                displacement = $2,
                no_of_cylinders = $3,
                car_range = $4
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.displacement)
        .bind(input.no_of_cylinders)
        .bind(input.car_range)
        .execute(conn)
        .await
        .map_err(CoreError::persistence)?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound { entity: ENTITY, id });
        }
        Ok(Engine::from_request(id, input))
    }

    async fn remove(conn: &mut PgConnection, id: DbId) -> CoreResult<Engine> {
        let existing = Self::find(&mut *conn, id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        let result = sqlx::query("DELETE FROM engines WHERE id = $1")
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
impl EngineStore for PgEngineStore {
    async fn get_by_id(&self, id: &str) -> CoreResult<Option<Engine>> {
        let id = parse_id(id)?;
        let mut tx = begin(&self.pool).await?;
        let result = Self::find(&mut tx, id).await;
        finish(tx, result).await
    }

    async fn create(&self, input: &EngineRequest) -> CoreResult<Engine> {
        let mut tx = begin(&self.pool).await?;
        let result = Self::insert(&mut tx, input).await;
        let engine = finish(tx, result).await?;
        tracing::debug!(engine_id = %engine.engine_id, "Engine created");
        Ok(engine)
    }

    async fn update(&self, id: &str, input: &EngineRequest) -> CoreResult<Engine> {
        let id = parse_id(id)?;
        let mut tx = begin(&self.pool).await?;
        let result = Self::replace(&mut tx, id, input).await;
        let engine = finish(tx, result).await?;
        tracing::debug!(engine_id = %id, "Engine updated");
        Ok(engine)
    }

    async fn delete(&self, id: &str) -> CoreResult<Engine> {
        let id = parse_id(id)?;
        let mut tx = begin(&self.pool).await?;
        let result = Self::remove(&mut tx, id).await;
        let engine = finish(tx, result).await?;
        tracing::debug!(engine_id = %id, "Engine deleted");
        Ok(engine)
    }
}
