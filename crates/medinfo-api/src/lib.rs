//! JSON REST API for medinfo.
//!
//! Exposes an axum [`Router`] backed by any
//! [`medinfo_core::store::DiseaseStore`]. Transport, tracing and CORS layers
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", medinfo_api::api_router(store.clone()))
//! ```

pub mod chatbot;
pub mod diseases;
pub mod error;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use medinfo_core::store::DiseaseStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: DiseaseStore + 'static,
{
  Router::new()
    .route("/diseases", get(diseases::list::<S>).post(diseases::create::<S>))
    .route(
      "/diseases/{id}",
      get(diseases::get_one::<S>)
        .put(diseases::update_one::<S>)
        .delete(diseases::delete_one::<S>),
    )
    .route("/chatbot", post(chatbot::handler::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
