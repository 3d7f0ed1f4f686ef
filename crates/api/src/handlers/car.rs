//! Handlers for the `/cars` resource.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use drivethrough_core::models::{Car, CarRequest};

use crate::error::AppResult;
use crate::handlers::not_found;
use crate::query::BrandParams;
use crate::state::AppState;

/// GET /api/v1/cars/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Car>> {
    let car = state
        .cars
        .get_by_id(&id)
        .await?
        .ok_or_else(|| not_found("Car", &id))?;
    Ok(Json(car))
}

/// GET /api/v1/cars?brand={brand}&isEngine={bool}
pub async fn list_by_brand(
    State(state): State<AppState>,
    params: Result<Query<BrandParams>, QueryRejection>,
) -> AppResult<Json<Vec<Car>>> {
    let Query(params) = params?;
    let cars = state
        .cars
        .get_by_brand(&params.brand, params.include_engine())
        .await?;
    Ok(Json(cars))
}

/// POST /api/v1/cars
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CarRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Car>)> {
    let Json(input) = payload?;
    let car = state.cars.create(&input).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

/// PUT /api/v1/cars/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CarRequest>, JsonRejection>,
) -> AppResult<Json<Car>> {
    let Json(input) = payload?;
    let car = state.cars.update(&id, &input).await?;
    Ok(Json(car))
}

/// DELETE /api/v1/cars/{id}
///
/// Responds with the car as it was before deletion.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<Car>> {
    let car = state.cars.delete(&id).await?;
    Ok(Json(car))
}
