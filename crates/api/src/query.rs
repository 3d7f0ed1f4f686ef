//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /cars` (`?brand=&isEngine=`).
///
/// A missing `brand` lists cars with an empty brand. Engines are joined only
/// when `isEngine` is exactly `true`; any other value, or none, skips the join.
#[derive(Debug, Deserialize)]
pub struct BrandParams {
    #[serde(default)]
    pub brand: String,
    #[serde(default, rename = "isEngine")]
    pub is_engine: Option<String>,
}

impl BrandParams {
    pub fn include_engine(&self) -> bool {
        self.is_engine.as_deref() == Some("true")
    }
}
