//! In-memory [`DiseaseStore`] used by the unit tests of this crate.
//!
//! Compiled under `#[cfg(test)]` only; lock poisoning simply panics the test.

use std::sync::Mutex;

use crate::{
  disease::{DiseaseFields, DiseaseRecord},
  store::{DiseaseStore, StoreError},
};

#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
  #[error("injected failure")]
  Injected,
}

impl StoreError for MemoryError {}

#[derive(Default)]
struct Inner {
  last_id:   i64,
  rows:      Vec<DiseaseRecord>,
  fail_next: bool,
}

#[derive(Default)]
pub struct MemoryStore {
  inner: Mutex<Inner>,
}

impl MemoryStore {
  /// Make the next operation fail with [`MemoryError::Injected`].
  pub fn fail_next(&self) {
    self.inner.lock().unwrap().fail_next = true;
  }

  fn with<T>(&self, f: impl FnOnce(&mut Inner) -> T) -> Result<T, MemoryError> {
    let mut inner = self.inner.lock().unwrap();
    if std::mem::take(&mut inner.fail_next) {
      return Err(MemoryError::Injected);
    }
    Ok(f(&mut *inner))
  }
}

impl Inner {
  fn insert(&mut self, fields: DiseaseFields) -> i64 {
    self.last_id += 1;
    self.rows.push(DiseaseRecord::from_fields(self.last_id, fields));
    self.last_id
  }
}

impl DiseaseStore for MemoryStore {
  type Error = MemoryError;

  async fn seed_if_empty(&self, records: Vec<DiseaseFields>) -> Result<usize, MemoryError> {
    self.with(|inner| {
      if !inner.rows.is_empty() {
        return 0;
      }
      let n = records.len();
      records.into_iter().for_each(|f| {
        inner.insert(f);
      });
      n
    })
  }

  async fn count(&self) -> Result<u64, MemoryError> {
    self.with(|inner| inner.rows.len() as u64)
  }

  async fn list_diseases(&self) -> Result<Vec<DiseaseRecord>, MemoryError> {
    self.with(|inner| inner.rows.clone())
  }

  async fn get_disease(&self, id: i64) -> Result<Option<DiseaseRecord>, MemoryError> {
    self.with(|inner| inner.rows.iter().find(|r| r.id == id).cloned())
  }

  async fn add_disease(&self, fields: DiseaseFields) -> Result<i64, MemoryError> {
    self.with(|inner| inner.insert(fields))
  }

  async fn update_disease(&self, id: i64, fields: DiseaseFields) -> Result<bool, MemoryError> {
    self.with(|inner| match inner.rows.iter_mut().find(|r| r.id == id) {
      Some(row) => {
        *row = DiseaseRecord::from_fields(id, fields);
        true
      }
      None => false,
    })
  }

  async fn delete_disease(&self, id: i64) -> Result<bool, MemoryError> {
    self.with(|inner| {
      let before = inner.rows.len();
      inner.rows.retain(|r| r.id != id);
      inner.rows.len() != before
    })
  }

  async fn find_first_match<'a>(
    &'a self,
    query: &'a str,
  ) -> Result<Option<DiseaseRecord>, MemoryError> {
    self.with(|inner| {
      inner
        .rows
        .iter()
        .find(|r| r.matches(query))
        .cloned()
    })
  }
}
