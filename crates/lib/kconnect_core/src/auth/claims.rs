//! Decode a credential's payload into an [`Identity`].

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};

use super::AuthError;
use crate::models::auth::{Identity, Role, TokenClaims};

/// Split `header.payload.signature` and decode the payload claims.
///
/// Accepts both the URL-safe and standard base64 alphabets, with or without
/// padding.
pub fn decode_claims(token: &str) -> Result<TokenClaims, AuthError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(AuthError::SegmentCount(segments.len()));
    }

    let payload = segments[1].trim_end_matches('=');
    let bytes = match URL_SAFE_NO_PAD.decode(payload) {
        Ok(bytes) => bytes,
        Err(_) => STANDARD_NO_PAD.decode(payload)?,
    };

    Ok(serde_json::from_slice(&bytes)?)
}

/// Decode a credential into the current user's identity.
///
/// `email = sub`, `role = role`, `name = name`, `id = id`.
pub fn decode_identity(token: &str) -> Result<Identity, AuthError> {
    let claims = decode_claims(token)?;
    let role: Role = claims
        .role
        .parse()
        .map_err(|_| AuthError::UnknownRole(claims.role.clone()))?;
    Ok(Identity {
        email: claims.sub,
        role,
        name: claims.name,
        id: claims.id,
    })
}
