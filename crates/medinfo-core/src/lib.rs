//! Core types and trait definitions for the medinfo disease catalog.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::DiseaseStore`]; the catalog service and
//! the keyword responder are written against that trait alone.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod catalog;
pub mod disease;
pub mod error;
pub mod responder;
pub mod seed;
pub mod store;

pub use error::{Error, Result};

#[cfg(test)]
mod memory;
