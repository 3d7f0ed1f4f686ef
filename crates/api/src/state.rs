use std::sync::Arc;

use drivethrough_core::service::{CarApi, EngineApi};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; services sit behind `Arc` trait objects so tests can
/// substitute in-memory implementations.
#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<dyn CarApi>,
    pub engines: Arc<dyn EngineApi>,
}
