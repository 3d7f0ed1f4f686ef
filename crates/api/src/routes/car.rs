use axum::routing::get;
use axum::Router;

use crate::handlers::car;
use crate::state::AppState;

/// Routes mounted at `/cars`.
///
/// ```text
/// GET    /          -> list_by_brand
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(car::list_by_brand).post(car::create))
        .route(
            "/{id}",
            get(car::get_by_id).put(car::update).delete(car::delete),
        )
}
