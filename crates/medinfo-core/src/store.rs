//! The `DiseaseStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `medinfo-store-sqlite`).
//! The catalog service and the keyword responder depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::disease::{DiseaseFields, DiseaseRecord};

/// Error bound for store backends.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// `true` when the backend refused the record itself (a schema constraint),
  /// as opposed to failing to carry out the operation.
  fn is_constraint_violation(&self) -> bool { false }
}

/// Abstraction over a disease catalog backend.
///
/// Every method is a single atomic operation against the backend, except
/// [`DiseaseStore::seed_if_empty`], which checks and inserts in one
/// transaction.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait DiseaseStore: Send + Sync {
  type Error: StoreError;

  /// Insert `records` only if the catalog is currently empty. Returns the
  /// number of records inserted, which is zero when the catalog already held
  /// data.
  fn seed_if_empty(
    &self,
    records: Vec<DiseaseFields>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// Number of records in the catalog.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// All records, in insertion order.
  fn list_diseases(
    &self,
  ) -> impl Future<Output = Result<Vec<DiseaseRecord>, Self::Error>> + Send + '_;

  /// Retrieve a record by id. Returns `None` if not found.
  fn get_disease(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<DiseaseRecord>, Self::Error>> + Send + '_;

  /// Persist a new record and return its freshly assigned id.
  fn add_disease(
    &self,
    fields: DiseaseFields,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Replace every field of the record at `id`. Returns `false` if no row was
  /// affected.
  fn update_disease(
    &self,
    id: i64,
    fields: DiseaseFields,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Remove the record at `id`. Returns `false` if no row was affected.
  fn delete_disease(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// The first record, in insertion order, whose lowercased `name`,
  /// `symptoms` or `causes` contains `query`, or whose lowercased `name` is
  /// contained in `query`. `query` must already be lowercase.
  fn find_first_match<'a>(
    &'a self,
    query: &'a str,
  ) -> impl Future<Output = Result<Option<DiseaseRecord>, Self::Error>> + Send + 'a;
}
