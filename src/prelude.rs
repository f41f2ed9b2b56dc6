use standard_error::{Interpolate, StandardError};

pub type Result<T> = std::result::Result<T, StandardError>;

/// Normalizes any store-level failure: log it, wrap it under ERR-DB-000.
pub(crate) fn db_err(err: sqlx::Error) -> StandardError {
    tracing::error!("database error: {err}");
    StandardError::new("ERR-DB-000").interpolate_err(err.to_string())
}
