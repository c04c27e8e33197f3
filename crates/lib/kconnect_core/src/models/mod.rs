//! Domain models.
//!
//! Field names follow Rust conventions; the serde attributes map them onto the
//! camelCase JSON the backend speaks.

pub mod auth;
pub mod department;
pub mod employee;
pub mod report;

pub use auth::{AuthResponse, Identity, LoginRequest, Role, TokenClaims};
pub use department::{Department, DepartmentInput, DepartmentStats};
pub use employee::{Employee, EmployeeUpdate, RegisterRequest};
pub use report::{Report, ReportInput};

use serde::{Deserialize, Deserializer};

/// Reads a nullable backend text column, mapping `null` to `""`.
pub(crate) fn null_as_empty<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}
