//! # kconnect_core
//!
//! Core domain logic for KConnect: models, credential decoding, score
//! classification and dashboard statistics. Performs no I/O.

pub mod auth;
pub mod models;
pub mod score;
pub mod stats;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
