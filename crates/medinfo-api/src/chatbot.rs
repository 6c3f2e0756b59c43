//! Handler for `POST /chatbot`.
//!
//! Body: `{"message": "..."}`. Replies with `{"reply": "..."}` when nothing in
//! the catalog matches, or `{"reply": "...", "disease": {...}}` otherwise.
//! A body that is not JSON gets the same `{"error": ...}` 500 as the catalog
//! endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use medinfo_core::{
  responder::{self, Reply},
  store::DiseaseStore,
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ChatBody {
  /// A missing message is answered like an empty one.
  #[serde(default)]
  pub message: String,
}

/// `POST /chatbot`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Json<Reply>, ApiError>
where
  S: DiseaseStore,
{
  let Json(body) = body.map_err(|r| ApiError::Validation(r.body_text()))?;
  let reply = responder::respond(store.as_ref(), &body.message).await?;
  tracing::debug!(matched = ?reply.disease.as_ref().map(|d| d.id), "chatbot reply");
  Ok(Json(reply))
}
