//! Handlers for `/diseases` endpoints.
//!
//! | Method   | Path             | Notes |
//! |----------|------------------|-------|
//! | `GET`    | `/diseases`      | `{"diseases": [...]}` in insertion order |
//! | `POST`   | `/diseases`      | Body: [`DiseaseBody`]; returns `{"message", "id"}` |
//! | `GET`    | `/diseases/:id`  | `{"disease": {...}}`; 404 if not found |
//! | `PUT`    | `/diseases/:id`  | Body: [`DiseaseBody`]; replaces every field |
//! | `DELETE` | `/diseases/:id`  | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
};
use medinfo_core::{catalog, disease::DiseaseFields, store::DiseaseStore};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiError;

// ─── Request body ─────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /diseases` and `PUT /diseases/:id`.
///
/// Fields are optional at the parsing stage so that an absent field is
/// reported through [`ApiError`] rather than as an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct DiseaseBody {
  pub name:               Option<String>,
  pub symptoms:           Option<String>,
  pub causes:             Option<String>,
  pub prevention:         Option<String>,
  pub when_to_see_doctor: Option<String>,
}

impl TryFrom<DiseaseBody> for DiseaseFields {
  type Error = medinfo_core::Error;

  fn try_from(b: DiseaseBody) -> Result<Self, Self::Error> {
    use medinfo_core::Error::MissingField;
    Ok(DiseaseFields {
      name:               b.name.ok_or(MissingField("name"))?,
      symptoms:           b.symptoms.ok_or(MissingField("symptoms"))?,
      causes:             b.causes.ok_or(MissingField("causes"))?,
      prevention:         b.prevention.ok_or(MissingField("prevention"))?,
      when_to_see_doctor: b
        .when_to_see_doctor
        .ok_or(MissingField("when_to_see_doctor"))?,
    })
  }
}

fn fields_from(
  body: Result<Json<DiseaseBody>, JsonRejection>,
) -> Result<DiseaseFields, ApiError> {
  let Json(body) = body.map_err(|r| ApiError::Validation(r.body_text()))?;
  Ok(DiseaseFields::try_from(body)?)
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /diseases`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Value>, ApiError>
where
  S: DiseaseStore,
{
  let diseases = catalog::list_all(store.as_ref()).await?;
  Ok(Json(json!({ "diseases": diseases })))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /diseases/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError>
where
  S: DiseaseStore,
{
  let disease = catalog::get_by_id(store.as_ref(), id).await?;
  Ok(Json(json!({ "disease": disease })))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /diseases`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<DiseaseBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError>
where
  S: DiseaseStore,
{
  let fields = fields_from(body)?;
  let id = catalog::create(store.as_ref(), fields).await?;
  tracing::info!(id, "disease added");
  Ok(Json(json!({ "message": "Disease added successfully", "id": id })))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /diseases/:id`
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  body: Result<Json<DiseaseBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError>
where
  S: DiseaseStore,
{
  let fields = fields_from(body)?;
  catalog::update(store.as_ref(), id, fields).await?;
  tracing::info!(id, "disease updated");
  Ok(Json(json!({ "message": "Disease updated successfully" })))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /diseases/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError>
where
  S: DiseaseStore,
{
  catalog::delete(store.as_ref(), id).await?;
  tracing::info!(id, "disease deleted");
  Ok(Json(json!({ "message": "Disease deleted successfully" })))
}
