pub mod car;
pub mod engine;

use drivethrough_core::error::CoreError;
use drivethrough_core::types::parse_id;

use crate::error::AppError;

/// A `None` read becomes a 404, or a 400 if the id was never well-formed.
fn not_found(entity: &'static str, raw: &str) -> AppError {
    match parse_id(raw) {
        Ok(id) => AppError::Core(CoreError::NotFound { entity, id }),
        Err(err) => AppError::Core(err),
    }
}
