pub mod car;
pub mod engine;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cars                      list by brand (?brand=&isEngine=), create
/// /cars/{id}                 get, update, delete
///
/// /engine                    create
/// /engine/{id}               get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cars", car::router())
        .nest("/engine", engine::router())
}
