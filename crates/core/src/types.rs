use crate::error::CoreError;

/// All primary keys are UUIDs generated by the application on insert.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a caller-supplied identifier into a [`DbId`].
///
/// Fails with [`CoreError::InvalidArgument`] when `raw` is not a well-formed UUID.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>()
        .map_err(|e| CoreError::InvalidArgument(format!("invalid id '{raw}': {e}")))
}
