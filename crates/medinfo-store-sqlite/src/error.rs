//! Error type for `medinfo-store-sqlite`.

use medinfo_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The database could not be opened or its schema could not be created.
  #[error("storage unavailable: {0}")]
  Unavailable(#[source] tokio_rusqlite::Error),

  #[error("database error: {0}")]
  Database(#[source] tokio_rusqlite::Error),

  /// SQLite refused the row (`NOT NULL` or `CHECK` constraint).
  #[error("constraint violation: {0}")]
  Constraint(String),
}

impl From<tokio_rusqlite::Error> for Error {
  fn from(e: tokio_rusqlite::Error) -> Self {
    match &e {
      tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(code, msg))
        if code.code == rusqlite::ErrorCode::ConstraintViolation =>
      {
        Error::Constraint(msg.clone().unwrap_or_else(|| code.to_string()))
      }
      _ => Error::Database(e),
    }
  }
}

impl StoreError for Error {
  fn is_constraint_violation(&self) -> bool { matches!(self, Self::Constraint(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
