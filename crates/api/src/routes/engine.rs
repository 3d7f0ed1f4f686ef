use axum::routing::{get, post};
use axum::Router;

use crate::handlers::engine;
use crate::state::AppState;

/// Routes mounted at `/engine`.
///
/// ```text
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(engine::create)).route(
        "/{id}",
        get(engine::get_by_id)
            .put(engine::update)
            .delete(engine::delete),
    )
}
