//! HTTP server wiring for medinfo.
//!
//! Loads [`ServerConfig`], opens and seeds the SQLite catalog, and mounts the
//! JSON API under `/api` with request tracing and (optionally) permissive
//! CORS.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use axum::Router;
use medinfo_core::{seed::starter_diseases, store::DiseaseStore};
use medinfo_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `MEDINFO_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
  /// Insert the starter diseases when the catalog is empty at startup.
  pub seed:          bool,
  /// Attach a permissive CORS layer so browser front-ends can call the API.
  pub cors:          bool,
}

impl ServerConfig {
  /// Layer built-in defaults, the optional TOML file at `path`, and the
  /// environment (`MEDINFO_PORT=8080`, ...), later sources winning.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 5000)?
      .set_default("database_path", "medinfo.db")?
      .set_default("seed", true)?
      .set_default("cors", true)?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("MEDINFO"))
      .build()
      .context("failed to read config file")?;

    let mut cfg: ServerConfig = settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")?;
    cfg.database_path = expand_tilde(&cfg.database_path);
    Ok(cfg)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Startup ──────────────────────────────────────────────────────────────────

/// Open the catalog at the configured path and seed it if requested.
///
/// Failing to open the database or create its schema is fatal.
pub async fn open_store(cfg: &ServerConfig) -> anyhow::Result<SqliteStore> {
  let store = SqliteStore::open(&cfg.database_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", cfg.database_path))?;

  if cfg.seed {
    store
      .seed_if_empty(starter_diseases())
      .await
      .context("failed to seed catalog")?;
  }

  let count = store.count().await.context("failed to count diseases")?;
  tracing::info!(count, path = ?cfg.database_path, "catalog ready");
  Ok(store)
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the top-level application router.
pub fn app<S>(store: Arc<S>, cfg: &ServerConfig) -> Router
where
  S: DiseaseStore + 'static,
{
  let router = Router::new()
    .nest("/api", medinfo_api::api_router(store))
    .layer(TraceLayer::new_for_http());

  if cfg.cors {
    router.layer(CorsLayer::permissive())
  } else {
    router
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use tower::ServiceExt as _;

  fn config(database_path: &str, cors: bool) -> ServerConfig {
    ServerConfig {
      host: "127.0.0.1".to_string(),
      port: 5000,
      database_path: PathBuf::from(database_path),
      seed: true,
      cors,
    }
  }

  #[test]
  fn missing_config_file_uses_defaults() {
    let cfg = ServerConfig::load(Path::new("does-not-exist.toml")).unwrap();
    assert_eq!(cfg.address(), "127.0.0.1:5000");
    assert_eq!(cfg.database_path, PathBuf::from("medinfo.db"));
    assert!(cfg.seed);
  }

  #[test]
  fn tilde_is_expanded() {
    let Ok(home) = std::env::var("HOME") else { return };
    assert_eq!(
      expand_tilde(Path::new("~/data/medinfo.db")),
      PathBuf::from(home).join("data/medinfo.db")
    );
    assert_eq!(expand_tilde(Path::new("/tmp/x.db")), PathBuf::from("/tmp/x.db"));
  }

  #[tokio::test]
  async fn open_store_seeds_once() {
    let store = open_store(&config(":memory:", true)).await.unwrap();
    assert_eq!(store.count().await.unwrap(), 5);
    assert_eq!(store.seed_if_empty(starter_diseases()).await.unwrap(), 0);
  }

  #[tokio::test]
  async fn api_is_mounted_under_prefix() {
    let cfg = config(":memory:", true);
    let store = Arc::new(open_store(&cfg).await.unwrap());

    let req = Request::builder()
      .uri("/api/diseases/2")
      .header(header::ORIGIN, "http://localhost:3000")
      .body(Body::empty())
      .unwrap();
    let resp = app(store, &cfg).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["disease"]["name"], "Dengue");
  }

  #[tokio::test]
  async fn cors_can_be_disabled() {
    let cfg = config(":memory:", false);
    let store = Arc::new(open_store(&cfg).await.unwrap());
    let req = Request::builder()
      .uri("/api/diseases")
      .header(header::ORIGIN, "http://localhost:3000")
      .body(Body::empty())
      .unwrap();
    let resp = app(store, &cfg).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(!resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
  }
}
