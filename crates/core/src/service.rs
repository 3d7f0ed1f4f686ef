//! Engine and car services.
//!
//! A service validates write requests and otherwise hands every call to its
//! store untouched. Handlers depend on the [`EngineApi`] / [`CarApi`] traits
//! so either side of the seam can be replaced in tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::models::{Car, CarRequest, Engine, EngineRequest};
use crate::store::{CarStore, EngineStore};
use crate::validation::{validate_car_request, validate_engine_request};

/// Operations exposed for engines.
#[async_trait]
pub trait EngineApi: Send + Sync {
    async fn get_by_id(&self, id: &str) -> CoreResult<Option<Engine>>;
    async fn create(&self, input: &EngineRequest) -> CoreResult<Engine>;
    async fn update(&self, id: &str, input: &EngineRequest) -> CoreResult<Engine>;
    async fn delete(&self, id: &str) -> CoreResult<Engine>;
}

/// Operations exposed for cars.
#[async_trait]
pub trait CarApi: Send + Sync {
    async fn get_by_id(&self, id: &str) -> CoreResult<Option<Car>>;
    async fn get_by_brand(&self, brand: &str, include_engine: bool) -> CoreResult<Vec<Car>>;
    async fn create(&self, input: &CarRequest) -> CoreResult<Car>;
    async fn update(&self, id: &str, input: &CarRequest) -> CoreResult<Car>;
    async fn delete(&self, id: &str) -> CoreResult<Car>;
}

// ---------------------------------------------------------------------------
// Engine service
// ---------------------------------------------------------------------------

/// Validating front for an [`EngineStore`].
#[derive(Clone)]
pub struct EngineService {
    store: Arc<dyn EngineStore>,
}

impl EngineService {
    pub fn new(store: Arc<dyn EngineStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EngineApi for EngineService {
    async fn get_by_id(&self, id: &str) -> CoreResult<Option<Engine>> {
        self.store.get_by_id(id).await
    }

    async fn create(&self, input: &EngineRequest) -> CoreResult<Engine> {
        validate_engine_request(input)
            .inspect_err(|err| tracing::debug!(error = %err, "Engine create rejected"))?;
        self.store.create(input).await
    }

    async fn update(&self, id: &str, input: &EngineRequest) -> CoreResult<Engine> {
        validate_engine_request(input)
            .inspect_err(|err| tracing::debug!(error = %err, id, "Engine update rejected"))?;
        self.store.update(id, input).await
    }

    async fn delete(&self, id: &str) -> CoreResult<Engine> {
        self.store.delete(id).await
    }
}

// ---------------------------------------------------------------------------
// Car service
// ---------------------------------------------------------------------------

/// Validating front for a [`CarStore`].
#[derive(Clone)]
pub struct CarService {
    store: Arc<dyn CarStore>,
}

impl CarService {
    pub fn new(store: Arc<dyn CarStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CarApi for CarService {
    async fn get_by_id(&self, id: &str) -> CoreResult<Option<Car>> {
        self.store.get_by_id(id).await
    }

    async fn get_by_brand(&self, brand: &str, include_engine: bool) -> CoreResult<Vec<Car>> {
        self.store.get_by_brand(brand, include_engine).await
    }

    async fn create(&self, input: &CarRequest) -> CoreResult<Car> {
        validate_car_request(input)
            .inspect_err(|err| tracing::debug!(error = %err, "Car create rejected"))?;
        self.store.create(input).await
    }

    async fn update(&self, id: &str, input: &CarRequest) -> CoreResult<Car> {
        validate_car_request(input)
            .inspect_err(|err| tracing::debug!(error = %err, id, "Car update rejected"))?;
        self.store.update(id, input).await
    }

    async fn delete(&self, id: &str) -> CoreResult<Car> {
        self.store.delete(id).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
