//! Handlers for the `/engine` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use drivethrough_core::models::{Engine, EngineRequest};

use crate::error::AppResult;
use crate::handlers::not_found;
use crate::state::AppState;

/// GET /api/v1/engine/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Engine>> {
    let engine = state
        .engines
        .get_by_id(&id)
        .await?
        .ok_or_else(|| not_found("Engine", &id))?;
    Ok(Json(engine))
}

/// POST /api/v1/engine
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<EngineRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Engine>)> {
    let Json(input) = payload?;
    let engine = state.engines.create(&input).await?;
    Ok((StatusCode::CREATED, Json(engine)))
}

/// PUT /api/v1/engine/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EngineRequest>, JsonRejection>,
) -> AppResult<Json<Engine>> {
    let Json(input) = payload?;
    let engine = state.engines.update(&id, &input).await?;
    Ok(Json(engine))
}

/// DELETE /api/v1/engine/{id}
///
/// Responds with the engine as it was before deletion.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Engine>> {
    let engine = state.engines.delete(&id).await?;
    Ok(Json(engine))
}
