//! reqwest-backed [`Gateway`].

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use kconnect_core::models::{
    AuthResponse, Department, DepartmentInput, DepartmentStats, Employee, EmployeeUpdate,
    LoginRequest, RegisterRequest, Report, ReportInput,
};

use super::{Gateway, routes};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// HTTP gateway bound to one base URL and, optionally, one credential.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    config: ClientConfig,
    token: Option<String>,
}

impl HttpGateway {
    /// Create a gateway without a credential.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            config: config.clone(),
            token: None,
        })
    }

    /// Attach a bearer credential to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Attach the credential if there is one.
    pub fn with_credential(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_string);
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        debug!(%method, path, authenticated = self.token.is_some(), "api request");
        let req = self.client.request(method, url);
        match &self.token {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}")),
            None => req,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        Self::json(response).await
    }

    async fn send<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.request(method, path).json(body).send().await?;
        Self::json(response).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let response = Self::check(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("unexpected body: {e}")))
    }

    /// Map non-success statuses onto [`ClientError`].
    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<no body>".to_string());
        Err(match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized(body),
            StatusCode::FORBIDDEN => ClientError::Forbidden(body),
            StatusCode::NOT_FOUND => ClientError::NotFound(body),
            StatusCode::CONFLICT => ClientError::Conflict(body),
            StatusCode::BAD_REQUEST => ClientError::Validation(body),
            other => ClientError::Server {
                status: other.as_u16(),
                body,
            },
        })
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        self.send(Method::POST, routes::POST_AUTH_LOGIN, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
        self.send(Method::POST, routes::POST_AUTH_REGISTER, request).await
    }

    async fn list_departments(&self) -> ClientResult<Vec<Department>> {
        self.get(routes::GET_DEPARTMENTS).await
    }

    async fn department_stats(&self) -> ClientResult<Vec<DepartmentStats>> {
        self.get(routes::GET_DEPARTMENTS_STATS).await
    }

    async fn get_department(&self, id: i64) -> ClientResult<Department> {
        self.get(&routes::with_param(routes::GET_DEPARTMENTS_ID, id)).await
    }

    async fn create_department(&self, input: &DepartmentInput) -> ClientResult<Department> {
        self.send(Method::POST, routes::POST_DEPARTMENTS, input).await
    }

    async fn update_department(
        &self,
        id: i64,
        input: &DepartmentInput,
    ) -> ClientResult<Department> {
        self.send(Method::PUT, &routes::with_param(routes::PUT_DEPARTMENTS_ID, id), input).await
    }

    async fn delete_department(&self, id: i64) -> ClientResult<()> {
        self.delete(&routes::with_param(routes::DELETE_DEPARTMENTS_ID, id)).await
    }

    async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.get(routes::GET_EMPLOYEES).await
    }

    async fn get_employee(&self, id: i64) -> ClientResult<Employee> {
        self.get(&routes::with_param(routes::GET_EMPLOYEES_ID, id)).await
    }

    async fn update_employee(&self, id: i64, update: &EmployeeUpdate) -> ClientResult<Employee> {
        self.send(Method::PUT, &routes::with_param(routes::PUT_EMPLOYEES_ID, id), update).await
    }

    async fn delete_employee(&self, id: i64) -> ClientResult<()> {
        self.delete(&routes::with_param(routes::DELETE_EMPLOYEES_ID, id)).await
    }

    async fn my_reports(&self) -> ClientResult<Vec<Report>> {
        self.get(routes::GET_REPORTS).await
    }

    async fn reports_by_department(&self, department_id: i64) -> ClientResult<Vec<Report>> {
        self.get(&routes::with_param(
            routes::GET_REPORTS_DEPARTMENT_DEPARTMENTID,
            department_id,
        ))
        .await
    }

    async fn create_report(&self, input: &ReportInput) -> ClientResult<Report> {
        self.send(Method::POST, routes::POST_REPORTS, input).await
    }

    async fn update_report(&self, id: i64, input: &ReportInput) -> ClientResult<Report> {
        self.send(Method::PUT, &routes::with_param(routes::PUT_REPORTS_ID, id), input).await
    }

    async fn delete_report(&self, id: i64) -> ClientResult<()> {
        self.delete(&routes::with_param(routes::DELETE_REPORTS_ID, id)).await
    }
}
