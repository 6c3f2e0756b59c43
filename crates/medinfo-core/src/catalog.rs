//! Catalog operations over any [`DiseaseStore`].
//!
//! Store errors are passed through, never retried or suppressed. A missing
//! row becomes [`Error::NotFound`]; a record the store refuses becomes
//! [`Error::Validation`]; everything else is [`Error::Storage`].

use crate::{
  Error, Result,
  disease::{DiseaseFields, DiseaseRecord},
  store::{DiseaseStore, StoreError},
};

pub(crate) fn store_err<E: StoreError>(e: E) -> Error {
  if e.is_constraint_violation() {
    Error::Validation(e.to_string())
  } else {
    Error::Storage(Box::new(e))
  }
}

/// Every record, in insertion order.
pub async fn list_all<S: DiseaseStore>(store: &S) -> Result<Vec<DiseaseRecord>> {
  store.list_diseases().await.map_err(store_err)
}

pub async fn get_by_id<S: DiseaseStore>(store: &S, id: i64) -> Result<DiseaseRecord> {
  store
    .get_disease(id)
    .await
    .map_err(store_err)?
    .ok_or(Error::NotFound(id))
}

/// Validate and insert `fields`, returning the new record's id.
pub async fn create<S: DiseaseStore>(store: &S, fields: DiseaseFields) -> Result<i64> {
  fields.validate()?;
  store.add_disease(fields).await.map_err(store_err)
}

/// Replace all fields of the record at `id`. Last write wins.
pub async fn update<S: DiseaseStore>(
  store: &S,
  id: i64,
  fields: DiseaseFields,
) -> Result<()> {
  fields.validate()?;
  if store.update_disease(id, fields).await.map_err(store_err)? {
    Ok(())
  } else {
    Err(Error::NotFound(id))
  }
}

/// Remove the record at `id`. Deleting the same id twice fails the second
/// time.
pub async fn delete<S: DiseaseStore>(store: &S, id: i64) -> Result<()> {
  if store.delete_disease(id).await.map_err(store_err)? {
    Ok(())
  } else {
    Err(Error::NotFound(id))
  }
}
