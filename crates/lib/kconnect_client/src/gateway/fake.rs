//! In-memory [`Gateway`] for unit tests.
//!
//! Records every call as `"METHOD /path"`. Individual calls can be made to
//! fail (HTTP 500) or to never complete, which is how cancellation is tested.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use kconnect_core::models::{
    AuthResponse, Department, DepartmentInput, DepartmentStats, Employee, EmployeeUpdate,
    LoginRequest, RegisterRequest, Report, ReportInput, Role,
};

use super::Gateway;
use crate::error::{ClientError, ClientResult};

#[derive(Default)]
pub(crate) struct Backend {
    pub departments: Vec<Department>,
    pub stats: Vec<DepartmentStats>,
    pub employees: Vec<Employee>,
    pub reports: Vec<Report>,
    /// `(email, password, token)`
    pub accounts: Vec<(String, String, String)>,
    /// Employee id of the caller, for `GET /reports` and `POST /reports`.
    pub me: i64,
    pub calls: Vec<String>,
    pub failing: HashSet<String>,
    pub stalled: HashSet<String>,
    pub registered: Vec<RegisterRequest>,
    pub last_employee_update: Option<EmployeeUpdate>,
    pub last_department_input: Option<DepartmentInput>,
    pub last_report_input: Option<ReportInput>,
    next_id: i64,
}

impl Backend {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        1000 + self.next_id
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeGateway {
    inner: Arc<Mutex<Backend>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backend(&self) -> MutexGuard<'_, Backend> {
        self.inner.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<String> {
        self.backend().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.backend().calls.clear();
    }

    pub fn fail(&self, call: &str) {
        self.backend().failing.insert(call.to_string());
    }

    pub fn stall(&self, call: &str) {
        self.backend().stalled.insert(call.to_string());
    }

    /// Record the call, then fail or hang if configured to.
    async fn enter(&self, call: String) -> ClientResult<()> {
        let (fails, stalls) = {
            let mut backend = self.backend();
            let fails = backend.failing.contains(&call);
            let stalls = backend.stalled.contains(&call);
            backend.calls.push(call);
            (fails, stalls)
        };
        if stalls {
            std::future::pending::<()>().await;
        }
        if fails {
            return Err(ClientError::Server {
                status: 500,
                body: "boom".into(),
            });
        }
        Ok(())
    }
}

pub(crate) fn department(id: i64, name: &str) -> Department {
    Department {
        id,
        name: name.into(),
        description: format!("{name} team"),
        created_at: None,
    }
}

pub(crate) fn stats(id: i64, name: &str, employee_count: i64) -> DepartmentStats {
    DepartmentStats {
        id,
        name: name.into(),
        employee_count,
    }
}

pub(crate) fn employee(id: i64, name: &str, role: Role, department_id: Option<i64>) -> Employee {
    Employee {
        id,
        full_name: name.into(),
        email: format!("{}@kconnect.io", name.to_lowercase().replace(' ', ".")),
        role,
        hire_date: None,
        department_id,
        department_name: None,
    }
}

pub(crate) fn report(id: i64, title: &str, score: i32, department_id: i64, employee_id: i64) -> Report {
    Report {
        id,
        title: title.into(),
        description: format!("{title} notes"),
        score,
        employee_id: Some(employee_id),
        employee_name: None,
        department_id: Some(department_id),
        department_name: None,
        created_at: None,
    }
}

fn missing(what: &str, id: i64) -> ClientError {
    ClientError::NotFound(format!("{what} {id}"))
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        self.enter("POST /auth/login".into()).await?;
        let backend = self.backend();
        backend
            .accounts
            .iter()
            .find(|(email, password, _)| *email == request.email && *password == request.password)
            .map(|(_, _, token)| AuthResponse {
                token: token.clone(),
            })
            .ok_or_else(|| ClientError::Unauthorized("Bad credentials".into()))
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
        self.enter("POST /auth/register".into()).await?;
        let mut backend = self.backend();
        if backend.employees.iter().any(|e| e.email == request.email) {
            return Err(ClientError::Conflict("email in use".into()));
        }
        let id = backend.next_id();
        backend.registered.push(request.clone());
        backend.employees.push(Employee {
            id,
            full_name: request.full_name.clone(),
            email: request.email.clone(),
            role: request.role,
            hire_date: None,
            department_id: request.department_id,
            department_name: None,
        });
        Ok(AuthResponse {
            token: format!("issued-{id}"),
        })
    }

    async fn list_departments(&self) -> ClientResult<Vec<Department>> {
        self.enter("GET /departments".into()).await?;
        Ok(self.backend().departments.clone())
    }

    async fn department_stats(&self) -> ClientResult<Vec<DepartmentStats>> {
        self.enter("GET /departments/stats".into()).await?;
        Ok(self.backend().stats.clone())
    }

    async fn get_department(&self, id: i64) -> ClientResult<Department> {
        self.enter(format!("GET /departments/{id}")).await?;
        self.backend()
            .departments
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| missing("department", id))
    }

    async fn create_department(&self, input: &DepartmentInput) -> ClientResult<Department> {
        self.enter("POST /departments".into()).await?;
        let mut backend = self.backend();
        let created = Department {
            id: backend.next_id(),
            name: input.name.clone(),
            description: input.description.clone(),
            created_at: None,
        };
        backend.last_department_input = Some(input.clone());
        backend.departments.push(created.clone());
        Ok(created)
    }

    async fn update_department(
        &self,
        id: i64,
        input: &DepartmentInput,
    ) -> ClientResult<Department> {
        self.enter(format!("PUT /departments/{id}")).await?;
        let mut backend = self.backend();
        backend.last_department_input = Some(input.clone());
        let dept = backend
            .departments
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| missing("department", id))?;
        dept.name = input.name.clone();
        dept.description = input.description.clone();
        Ok(dept.clone())
    }

    async fn delete_department(&self, id: i64) -> ClientResult<()> {
        self.enter(format!("DELETE /departments/{id}")).await?;
        let mut backend = self.backend();
        let before = backend.departments.len();
        backend.departments.retain(|d| d.id != id);
        if backend.departments.len() == before {
            return Err(missing("department", id));
        }
        Ok(())
    }

    async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.enter("GET /employees".into()).await?;
        Ok(self.backend().employees.clone())
    }

    async fn get_employee(&self, id: i64) -> ClientResult<Employee> {
        self.enter(format!("GET /employees/{id}")).await?;
        self.backend()
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| missing("employee", id))
    }

    async fn update_employee(&self, id: i64, update: &EmployeeUpdate) -> ClientResult<Employee> {
        self.enter(format!("PUT /employees/{id}")).await?;
        let mut backend = self.backend();
        backend.last_employee_update = Some(update.clone());
        let emp = backend
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| missing("employee", id))?;
        emp.full_name = update.full_name.clone();
        emp.department_id = update.department_id;
        Ok(emp.clone())
    }

    async fn delete_employee(&self, id: i64) -> ClientResult<()> {
        self.enter(format!("DELETE /employees/{id}")).await?;
        let mut backend = self.backend();
        let before = backend.employees.len();
        backend.employees.retain(|e| e.id != id);
        if backend.employees.len() == before {
            return Err(missing("employee", id));
        }
        Ok(())
    }

    async fn my_reports(&self) -> ClientResult<Vec<Report>> {
        self.enter("GET /reports".into()).await?;
        let backend = self.backend();
        Ok(backend
            .reports
            .iter()
            .filter(|r| r.employee_id == Some(backend.me))
            .cloned()
            .collect())
    }

    async fn reports_by_department(&self, department_id: i64) -> ClientResult<Vec<Report>> {
        self.enter(format!("GET /reports/department/{department_id}"))
            .await?;
        Ok(self
            .backend()
            .reports
            .iter()
            .filter(|r| r.department_id == Some(department_id))
            .cloned()
            .collect())
    }

    async fn create_report(&self, input: &ReportInput) -> ClientResult<Report> {
        self.enter("POST /reports".into()).await?;
        let mut backend = self.backend();
        let me = backend.me;
        let department_id = backend
            .employees
            .iter()
            .find(|e| e.id == me)
            .and_then(|e| e.department_id);
        let created = Report {
            id: backend.next_id(),
            title: input.title.clone(),
            description: input.description.clone(),
            score: input.score,
            employee_id: Some(me),
            employee_name: None,
            department_id,
            department_name: None,
            created_at: None,
        };
        backend.last_report_input = Some(input.clone());
        backend.reports.push(created.clone());
        Ok(created)
    }

    async fn update_report(&self, id: i64, input: &ReportInput) -> ClientResult<Report> {
        self.enter(format!("PUT /reports/{id}")).await?;
        let mut backend = self.backend();
        backend.last_report_input = Some(input.clone());
        let report = backend
            .reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| missing("report", id))?;
        report.title = input.title.clone();
        report.description = input.description.clone();
        report.score = input.score;
        Ok(report.clone())
    }

    async fn delete_report(&self, id: i64) -> ClientResult<()> {
        self.enter(format!("DELETE /reports/{id}")).await?;
        let mut backend = self.backend();
        let before = backend.reports.len();
        backend.reports.retain(|r| r.id != id);
        if backend.reports.len() == before {
            return Err(missing("report", id));
        }
        Ok(())
    }
}
