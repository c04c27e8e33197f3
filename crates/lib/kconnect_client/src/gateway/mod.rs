//! API gateway: one method per backend endpoint.
//!
//! Views and the session talk to the backend only through [`Gateway`], so a
//! test double can stand in for [`HttpGateway`].

pub mod http;
pub mod routes;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;

use kconnect_core::models::{
    AuthResponse, Department, DepartmentInput, DepartmentStats, Employee, EmployeeUpdate,
    LoginRequest, RegisterRequest, Report, ReportInput,
};

use crate::error::ClientResult;

pub use http::HttpGateway;

/// Backend REST contract.
///
/// Implementations attach the bearer credential they were built with; none
/// retry, cache or coalesce requests.
#[async_trait]
pub trait Gateway: Send + Sync {
    // Auth (no credential required)
    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse>;
    async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse>;

    // Departments
    async fn list_departments(&self) -> ClientResult<Vec<Department>>;
    async fn department_stats(&self) -> ClientResult<Vec<DepartmentStats>>;
    async fn get_department(&self, id: i64) -> ClientResult<Department>;
    async fn create_department(&self, input: &DepartmentInput) -> ClientResult<Department>;
    async fn update_department(&self, id: i64, input: &DepartmentInput)
    -> ClientResult<Department>;
    async fn delete_department(&self, id: i64) -> ClientResult<()>;

    // Employees
    async fn list_employees(&self) -> ClientResult<Vec<Employee>>;
    async fn get_employee(&self, id: i64) -> ClientResult<Employee>;
    async fn update_employee(&self, id: i64, update: &EmployeeUpdate) -> ClientResult<Employee>;
    async fn delete_employee(&self, id: i64) -> ClientResult<()>;

    // Reports
    async fn my_reports(&self) -> ClientResult<Vec<Report>>;
    async fn reports_by_department(&self, department_id: i64) -> ClientResult<Vec<Report>>;
    async fn create_report(&self, input: &ReportInput) -> ClientResult<Report>;
    async fn update_report(&self, id: i64, input: &ReportInput) -> ClientResult<Report>;
    async fn delete_report(&self, id: i64) -> ClientResult<()>;
}
