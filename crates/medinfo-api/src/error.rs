//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Only "not found" has a status of its own; every other failure, including
//! malformed or incomplete request bodies, is a 500 whose body echoes the
//! underlying message.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("Disease not found")]
  NotFound,

  #[error("{0}")]
  Validation(String),

  #[error("{0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<medinfo_core::Error> for ApiError {
  fn from(e: medinfo_core::Error) -> Self {
    match e {
      medinfo_core::Error::NotFound(_) => ApiError::NotFound,
      medinfo_core::Error::Storage(inner) => ApiError::Store(inner),
      other => ApiError::Validation(other.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::NotFound => StatusCode::NOT_FOUND,
      ApiError::Validation(m) => {
        tracing::warn!(error = %m, "rejected disease record");
        StatusCode::INTERNAL_SERVER_ERROR
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store operation failed");
        StatusCode::INTERNAL_SERVER_ERROR
      }
    };
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
