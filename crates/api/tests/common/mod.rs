//! Shared helpers for HTTP-level tests.
//!
//! The application is built with real services over in-memory stores, so
//! validation and error mapping run exactly as in production while no
//! database is needed.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use drivethrough_api::config::ServerConfig;
use drivethrough_api::router::build_app_router;
use drivethrough_api::state::AppState;
use drivethrough_core::error::{CoreError, CoreResult};
use drivethrough_core::models::{Car, CarRequest, Engine, EngineRequest};
use drivethrough_core::service::{CarService, EngineService};
use drivethrough_core::store::{CarStore, EngineStore};
use drivethrough_core::types::{parse_id, DbId};
use http_body_util::BodyExt;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// In-memory stores
// ---------------------------------------------------------------------------

/// Tables shared by the in-memory engine and car stores.
#[derive(Default)]
pub struct MemoryDb {
    engines: Mutex<HashMap<DbId, Engine>>,
    cars: Mutex<HashMap<DbId, Car>>,
}

pub struct MemoryEngineStore(pub Arc<MemoryDb>);

pub struct MemoryCarStore(pub Arc<MemoryDb>);

#[async_trait]
impl EngineStore for MemoryEngineStore {
    async fn get_by_id(&self, id: &str) -> CoreResult<Option<Engine>> {
        let id = parse_id(id)?;
        Ok(self.0.engines.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, input: &EngineRequest) -> CoreResult<Engine> {
        let engine = Engine::from_request(DbId::new_v4(), input);
        self.0
            .engines
            .lock()
            .unwrap()
            .insert(engine.engine_id, engine.clone());
        Ok(engine)
    }

    async fn update(&self, id: &str, input: &EngineRequest) -> CoreResult<Engine> {
        let id = parse_id(id)?;
        let mut engines = self.0.engines.lock().unwrap();
        let row = engines
            .get_mut(&id)
            .ok_or(CoreError::NotFound {
                entity: "Engine",
                id,
            })?;
        *row = Engine::from_request(id, input);
        Ok(row.clone())
    }

    async fn delete(&self, id: &str) -> CoreResult<Engine> {
        let id = parse_id(id)?;
        self.0
            .engines
            .lock()
            .unwrap()
            .remove(&id)
            .ok_or(CoreError::NotFound {
                entity: "Engine",
                id,
            })
    }
}

impl MemoryCarStore {
    fn engine(&self, id: DbId) -> CoreResult<Engine> {
        self.0
            .engines
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| CoreError::persistence("violates foreign key constraint"))
    }
}

#[async_trait]
impl CarStore for MemoryCarStore {
    async fn get_by_id(&self, id: &str) -> CoreResult<Option<Car>> {
        let id = parse_id(id)?;
        Ok(self.0.cars.lock().unwrap().get(&id).cloned())
    }

    async fn get_by_brand(&self, brand: &str, include_engine: bool) -> CoreResult<Vec<Car>> {
        let mut cars: Vec<Car> = self
            .0
            .cars
            .lock()
            .unwrap()
            .values()
            .filter(|car| car.brand == brand)
            .cloned()
            .map(|mut car| {
                if !include_engine {
                    car.engine = None;
                }
                car
            })
            .collect();
        cars.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cars)
    }

    async fn create(&self, input: &CarRequest) -> CoreResult<Car> {
        let engine = self.engine(input.engine.engine_id)?;
        let now = chrono::Utc::now();
        let car = Car {
            id: DbId::new_v4(),
            name: input.name.clone(),
            year: input.year.clone(),
            brand: input.brand.clone(),
            fuel_type: input.fuel_type.clone(),
            engine: Some(engine),
            price: input.price,
            created_at: now,
            updated_at: now,
        };
        self.0.cars.lock().unwrap().insert(car.id, car.clone());
        Ok(car)
    }

    async fn update(&self, id: &str, input: &CarRequest) -> CoreResult<Car> {
        let id = parse_id(id)?;
        let engine = self.engine(input.engine.engine_id)?;
        let mut cars = self.0.cars.lock().unwrap();
        let car = cars
            .get_mut(&id)
            .ok_or(CoreError::NotFound { entity: "Car", id })?;
        car.name = input.name.clone();
        car.year = input.year.clone();
        car.brand = input.brand.clone();
        car.fuel_type = input.fuel_type.clone();
        car.engine = Some(engine);
        car.price = input.price;
        car.updated_at = chrono::Utc::now();
        Ok(car.clone())
    }

    async fn delete(&self, id: &str) -> CoreResult<Car> {
        let id = parse_id(id)?;
        self.0
            .cars
            .lock()
            .unwrap()
            .remove(&id)
            .ok_or(CoreError::NotFound { entity: "Car", id })
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused".to_string(),
        max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over the given in-memory tables.
pub fn build_test_app(db: Arc<MemoryDb>) -> Router {
    let state = AppState {
        cars: Arc::new(CarService::new(Arc::new(MemoryCarStore(db.clone())))),
        engines: Arc::new(EngineService::new(Arc::new(MemoryEngineStore(db)))),
    };
    build_app_router(state, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Body>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder.body(body.unwrap_or_else(Body::empty)).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(Body::from(json.to_string()))).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(Body::from(json.to_string()))).await
}

pub async fn post_raw(app: Router, uri: &str, raw: &'static str) -> Response<Body> {
    send(app, Method::POST, uri, Some(Body::from(raw))).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an engine through the API and return its JSON.
pub async fn create_engine(db: &Arc<MemoryDb>, displacement: i64) -> serde_json::Value {
    let response = post_json(
        build_test_app(db.clone()),
        "/api/v1/engine",
        serde_json::json!({
            "displacement": displacement,
            "noOfCylinders": 4,
            "carRange": 600
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
