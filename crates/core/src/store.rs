//! Persistence seams for engines and cars.
//!
//! Implementations run every operation inside its own transaction: committed
//! when the operation succeeds, rolled back before the error is returned
//! otherwise. Identifiers arrive as raw strings and are parsed by the store,
//! so a malformed id surfaces as [`CoreError::InvalidArgument`].
//!
//! [`CoreError::InvalidArgument`]: crate::error::CoreError::InvalidArgument

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::models::{Car, CarRequest, Engine, EngineRequest};

/// Transactional reads and writes against the `engines` table.
#[async_trait]
pub trait EngineStore: Send + Sync {
    /// Look up an engine. `Ok(None)` when no row has this id.
    async fn get_by_id(&self, id: &str) -> CoreResult<Option<Engine>>;

    /// Insert an engine under a freshly generated id.
    async fn create(&self, input: &EngineRequest) -> CoreResult<Engine>;

    /// Replace an engine's figures. `NotFound` when zero rows were affected.
    async fn update(&self, id: &str, input: &EngineRequest) -> CoreResult<Engine>;

    /// Delete an engine and return it as it was before deletion.
    async fn delete(&self, id: &str) -> CoreResult<Engine>;
}

/// Transactional reads and writes against the `cars` table.
#[async_trait]
pub trait CarStore: Send + Sync {
    /// Look up a car together with its engine. `Ok(None)` when absent.
    async fn get_by_id(&self, id: &str) -> CoreResult<Option<Car>>;

    /// All cars whose brand matches exactly. Engines are joined only when
    /// `include_engine` is set.
    async fn get_by_brand(&self, brand: &str, include_engine: bool) -> CoreResult<Vec<Car>>;

    /// Insert a car referencing an existing engine.
    async fn create(&self, input: &CarRequest) -> CoreResult<Car>;

    /// Replace every mutable field of a car and refresh `updated_at`.
    async fn update(&self, id: &str, input: &CarRequest) -> CoreResult<Car>;

    /// Delete a car and return it as it was before deletion.
    async fn delete(&self, id: &str) -> CoreResult<Car>;
}
