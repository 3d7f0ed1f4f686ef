//! Per-operation transaction scoping shared by the stores.

use drivethrough_core::error::{CoreError, CoreResult};
use sqlx::{PgPool, Postgres, Transaction};

pub(crate) type PgTx = Transaction<'static, Postgres>;

/// Open a transaction on `pool`.
pub(crate) async fn begin(pool: &PgPool) -> CoreResult<PgTx> {
    pool.begin().await.map_err(CoreError::persistence)
}

/// Close `tx` according to `result`: commit on success, roll back on error.
///
/// A failed commit is reported as a persistence error. A failed rollback is
/// logged and returned alongside the original error as
/// [`CoreError::RollbackFailed`].
pub(crate) async fn finish<T>(tx: PgTx, result: CoreResult<T>) -> CoreResult<T> {
    match result {
        Ok(value) => {
            tx.commit().await.map_err(CoreError::persistence)?;
            Ok(value)
        }
        Err(error) => match tx.rollback().await {
            Ok(()) => Err(error),
            Err(rollback) => {
                tracing::error!(
                    error = %error,
                    rollback_error = %rollback,
                    "Failed to roll back transaction",
                );
                Err(CoreError::RollbackFailed {
                    error: Box::new(error),
                    rollback: Box::new(rollback),
                })
            }
        },
    }
}
