//! [`SqliteStore`]: the SQLite implementation of [`DiseaseStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use medinfo_core::{
  disease::{DiseaseFields, DiseaseRecord},
  store::DiseaseStore,
};

use crate::{Error, Result, schema::SCHEMA};

const SELECT_COLUMNS: &str =
  "SELECT id, name, symptoms, causes, prevention, when_to_see_doctor FROM diseases";

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<DiseaseRecord> {
  Ok(DiseaseRecord {
    id:                 row.get(0)?,
    name:               row.get(1)?,
    symptoms:           row.get(2)?,
    causes:             row.get(3)?,
    prevention:         row.get(4)?,
    when_to_see_doctor: row.get(5)?,
  })
}

fn insert(conn: &rusqlite::Connection, fields: &DiseaseFields) -> rusqlite::Result<i64> {
  conn.execute(
    "INSERT INTO diseases (name, symptoms, causes, prevention, when_to_see_doctor)
     VALUES (?1, ?2, ?3, ?4, ?5)",
    rusqlite::params![
      fields.name,
      fields.symptoms,
      fields.causes,
      fields.prevention,
      fields.when_to_see_doctor,
    ],
  )?;
  Ok(conn.last_insert_rowid())
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A disease catalog backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(Error::Unavailable)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(Error::Unavailable)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
      .map_err(Error::Unavailable)
  }
}

// ─── DiseaseStore impl ───────────────────────────────────────────────────────

impl DiseaseStore for SqliteStore {
  type Error = Error;

  async fn seed_if_empty(&self, records: Vec<DiseaseFields>) -> Result<usize> {
    let inserted = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let count: i64 =
          tx.query_row("SELECT COUNT(*) FROM diseases", [], |r| r.get(0))?;
        if count > 0 {
          return Ok(0);
        }
        for fields in &records {
          insert(&tx, fields)?;
        }
        tx.commit()?;
        Ok(records.len())
      })
      .await?;

    if inserted > 0 {
      tracing::info!(count = inserted, "seeded empty catalog with starter diseases");
    } else {
      tracing::debug!("catalog already populated; skipping seed");
    }
    Ok(inserted)
  }

  async fn count(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM diseases", [], |r| r.get(0))?))
      .await?;
    Ok(count.unsigned_abs())
  }

  async fn list_diseases(&self) -> Result<Vec<DiseaseRecord>> {
    Ok(
      self
        .conn
        .call(|conn| {
          let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id"))?;
          let rows = stmt
            .query_map([], row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
          Ok(rows)
        })
        .await?,
    )
  }

  async fn get_disease(&self, id: i64) -> Result<Option<DiseaseRecord>> {
    Ok(
      self
        .conn
        .call(move |conn| {
          Ok(conn
            .query_row(
              &format!("{SELECT_COLUMNS} WHERE id = ?1"),
              rusqlite::params![id],
              row_to_record,
            )
            .optional()?)
        })
        .await?,
    )
  }

  async fn add_disease(&self, fields: DiseaseFields) -> Result<i64> {
    Ok(self.conn.call(move |conn| Ok(insert(conn, &fields)?)).await?)
  }

  async fn update_disease(&self, id: i64, fields: DiseaseFields) -> Result<bool> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE diseases
           SET name = ?1, symptoms = ?2, causes = ?3, prevention = ?4,
               when_to_see_doctor = ?5
           WHERE id = ?6",
          rusqlite::params![
            fields.name,
            fields.symptoms,
            fields.causes,
            fields.prevention,
            fields.when_to_see_doctor,
            id,
          ],
        )?)
      })
      .await?;
    Ok(affected > 0)
  }

  async fn delete_disease(&self, id: i64) -> Result<bool> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM diseases WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(affected > 0)
  }

  async fn find_first_match<'a>(
    &'a self,
    query: &'a str,
  ) -> Result<Option<DiseaseRecord>> {
    // SQLite's lower() only folds ASCII, so rows are matched in Rust.
    let query = query.to_owned();
    Ok(
      self
        .conn
        .call(move |conn| {
          let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id"))?;
          let rows = stmt.query_map([], row_to_record)?;
          for row in rows {
            let record = row?;
            if record.matches(&query) {
              return Ok(Some(record));
            }
          }
          Ok(None)
        })
        .await?,
    )
  }
}
