//! Error types for `medinfo-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("disease not found: {0}")]
  NotFound(i64),

  #[error("missing required field: {0}")]
  MissingField(&'static str),

  /// The storage layer refused the record (e.g. a `NOT NULL` constraint).
  #[error("invalid disease record: {0}")]
  Validation(String),

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
