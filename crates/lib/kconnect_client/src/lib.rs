//! # kconnect_client
//!
//! Client library for the KConnect backend: session handling, the REST
//! gateway, dashboard aggregation and the resource views.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod gateway;
pub mod nav;
pub mod session;
pub mod view;

pub use config::ClientConfig;
pub use dashboard::{Dashboard, DashboardView};
pub use error::{ClientError, ClientResult};
pub use gateway::{Gateway, HttpGateway};
pub use nav::Route;
pub use session::{CookieJar, CredentialStore, MemoryStore, Session};
pub use view::{
    ActionOutcome, DepartmentsView, EmployeesView, Prompt, ReportsView, ViewContext,
};
