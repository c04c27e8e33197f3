//! Employee directory.
//!
//! Administrators see everyone and manage accounts. An employee sees only
//! their own profile and may edit its name and department.

use kconnect_core::models::{Department, Employee, EmployeeUpdate, RegisterRequest};

use super::{ActionOutcome, Prompt, ViewContext, first_empty};
use crate::gateway::Gateway;

pub struct EmployeesView<G, P> {
    ctx: ViewContext<G, P>,
    employees: Vec<Employee>,
    departments: Vec<Department>,
    /// Registration form for new employees.
    pub form: RegisterRequest,
    edit: Option<Employee>,
}

impl<G: Gateway, P: Prompt> EmployeesView<G, P> {
    pub fn new(ctx: ViewContext<G, P>) -> Self {
        Self {
            ctx,
            employees: Vec::new(),
            departments: Vec::new(),
            form: RegisterRequest::default(),
            edit: None,
        }
    }

    pub async fn mount(ctx: ViewContext<G, P>) -> Self {
        let mut view = Self::new(ctx);
        view.load().await;
        view
    }

    pub fn context(&self) -> &ViewContext<G, P> {
        &self.ctx
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Choices for the department picker. Empty for employees.
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn editing(&self) -> Option<&Employee> {
        self.edit.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut Employee> {
        self.edit.as_mut()
    }

    fn may_edit(&self, id: i64) -> bool {
        self.ctx.is_admin() || self.ctx.identity().id == id
    }

    /// Admins: the full directory plus departments. Employees: their own
    /// profile as a single row.
    pub async fn load(&mut self) -> ActionOutcome {
        let outcome = self.refresh().await;
        if outcome != ActionOutcome::Completed || !self.ctx.is_admin() {
            return outcome;
        }
        match self.ctx.call(self.ctx.gateway().list_departments()).await {
            Ok(departments) => {
                self.departments = departments;
                ActionOutcome::Completed
            }
            Err(e) => self.ctx.fail("loading departments", &e),
        }
    }

    /// Refetch the employee rows only. Used after writes.
    pub async fn refresh(&mut self) -> ActionOutcome {
        if !self.ctx.is_admin() {
            let id = self.ctx.identity().id;
            return match self.ctx.call(self.ctx.gateway().get_employee(id)).await {
                Ok(me) => {
                    self.employees = vec![me];
                    ActionOutcome::Completed
                }
                Err(e) => self.ctx.fail("loading profile", &e),
            };
        }
        match self.ctx.call(self.ctx.gateway().list_employees()).await {
            Ok(employees) => {
                self.employees = employees;
                ActionOutcome::Completed
            }
            Err(e) => self.ctx.fail("loading employees", &e),
        }
    }

    /// Register a new account.
    pub async fn create(&mut self) -> ActionOutcome {
        if !self.ctx.is_admin() {
            return ActionOutcome::NotPermitted;
        }
        if let Some(field) = first_empty(&[
            ("full name", self.form.full_name.as_str()),
            ("email", self.form.email.as_str()),
            ("password", self.form.password.as_str()),
        ]) {
            return ActionOutcome::Incomplete(field);
        }

        let request = self.form.trimmed();
        match self.ctx.call(self.ctx.gateway().register(&request)).await {
            Ok(_) => {
                self.ctx.alert("Employee created");
                self.form = RegisterRequest::default();
                self.refresh().await;
                ActionOutcome::Completed
            }
            Err(e) => self.ctx.fail("creating employee", &e),
        }
    }

    /// Open an edit buffer. Employees may only open their own row.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        if !self.may_edit(id) {
            return false;
        }
        self.edit = self.employees.iter().find(|e| e.id == id).cloned();
        self.edit.is_some()
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Send name and department from the edit buffer. The email is never
    /// sent.
    pub async fn submit_edit(&mut self) -> ActionOutcome {
        let Some(edit) = &self.edit else {
            return ActionOutcome::Incomplete("employee");
        };
        if !self.may_edit(edit.id) {
            return ActionOutcome::NotPermitted;
        }
        if edit.full_name.is_empty() {
            return ActionOutcome::Incomplete("full name");
        }

        let id = edit.id;
        let update = EmployeeUpdate::from(edit);
        match self
            .ctx
            .call(self.ctx.gateway().update_employee(id, &update))
            .await
        {
            Ok(_) => {
                self.ctx.alert("Employee updated");
                self.edit = None;
                self.refresh().await;
                ActionOutcome::Completed
            }
            Err(e) => self.ctx.fail("updating employee", &e),
        }
    }

    pub async fn delete(&mut self, id: i64) -> ActionOutcome {
        if !self.ctx.is_admin() {
            return ActionOutcome::NotPermitted;
        }
        if !self
            .ctx
            .confirm("Are you sure you want to delete this employee?")
        {
            return ActionOutcome::Declined;
        }
        match self.ctx.call(self.ctx.gateway().delete_employee(id)).await {
            Ok(()) => {
                self.ctx.alert("Employee deleted");
                self.employees.retain(|e| e.id != id);
                ActionOutcome::Completed
            }
            Err(e) => self.ctx.fail("deleting employee", &e),
        }
    }
}
