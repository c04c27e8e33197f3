//! Authentication domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// User role. Gates which views render and which endpoints are called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    /// Wire representation (`ADMIN` / `EMPLOYEE`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Employee => "EMPLOYEE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "EMPLOYEE" => Ok(Role::Employee),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Current user, derived from the credential's claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub role: Role,
    pub name: String,
    pub id: i64,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Claims carried in the credential payload.
///
/// Only the fields the client reads are modelled; `exp`/`iat` are kept for
/// display and are never checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the user's email.
    pub sub: String,
    /// `ADMIN` or `EMPLOYEE`, kept as a string so unknown roles surface as a
    /// decode error rather than a serde one.
    pub role: String,
    /// Display name.
    pub name: String,
    /// Employee id.
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

/// `POST /auth/login` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` and `POST /auth/register` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}
