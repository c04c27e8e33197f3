//! Credential handling.
//!
//! The client trusts the backend: a credential is only split and decoded to
//! learn who the user is. The signature and expiry are never checked here;
//! a tampered or stale token is rejected by the backend on the next call.

pub mod claims;

use thiserror::Error;

pub use claims::{decode_claims, decode_identity};

/// Credential decoding errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Malformed token: expected 3 segments, found {0}")]
    SegmentCount(usize),

    #[error("Token payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("Token payload is not valid claims JSON: {0}")]
    Claims(#[from] serde_json::Error),

    #[error("Unknown role: {0}")]
    UnknownRole(String),
}
