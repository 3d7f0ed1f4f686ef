//! Postgres implementations of the core store traits.

pub mod car_repo;
pub mod engine_repo;

pub use car_repo::PgCarStore;
pub use engine_repo::PgEngineStore;
