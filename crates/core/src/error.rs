use crate::types::DbId;
use crate::validation::ValidationError;

/// Boxed source for failures raised below the core (database driver, pool).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by stores and services.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Persistence error: {0}")]
    Persistence(#[source] BoxError),

    /// The operation failed and rolling its transaction back failed too.
    #[error("{error} (rollback also failed: {rollback})")]
    RollbackFailed {
        #[source]
        error: Box<CoreError>,
        rollback: BoxError,
    },
}

/// Convenience alias used across the store and service seams.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn persistence(err: impl Into<BoxError>) -> Self {
        Self::Persistence(err.into())
    }

    /// The failure that caused the operation to abort, looking through a
    /// failed rollback.
    pub fn primary(&self) -> &CoreError {
        match self {
            Self::RollbackFailed { error, .. } => error.primary(),
            other => other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.primary(), Self::NotFound { .. })
    }
}
