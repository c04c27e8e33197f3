//! Department table. Administrators only.

use kconnect_core::models::{Department, DepartmentInput};

use super::{ActionOutcome, Prompt, ViewContext, first_empty};
use crate::gateway::Gateway;

pub struct DepartmentsView<G, P> {
    ctx: ViewContext<G, P>,
    departments: Vec<Department>,
    /// Create form.
    pub form: DepartmentInput,
    edit: Option<Department>,
}

impl<G: Gateway, P: Prompt> DepartmentsView<G, P> {
    pub fn new(ctx: ViewContext<G, P>) -> Self {
        Self {
            ctx,
            departments: Vec::new(),
            form: DepartmentInput::default(),
            edit: None,
        }
    }

    /// Create the view and run its initial load.
    pub async fn mount(ctx: ViewContext<G, P>) -> Self {
        let mut view = Self::new(ctx);
        view.load().await;
        view
    }

    pub fn context(&self) -> &ViewContext<G, P> {
        &self.ctx
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn editing(&self) -> Option<&Department> {
        self.edit.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut Department> {
        self.edit.as_mut()
    }

    /// Fetch all departments. Employees get an empty table and no request.
    pub async fn load(&mut self) -> ActionOutcome {
        if !self.ctx.is_admin() {
            return ActionOutcome::NotPermitted;
        }
        match self.ctx.call(self.ctx.gateway().list_departments()).await {
            Ok(departments) => {
                self.departments = departments;
                ActionOutcome::Completed
            }
            Err(e) => self.ctx.fail("loading departments", &e),
        }
    }

    pub async fn create(&mut self) -> ActionOutcome {
        if !self.ctx.is_admin() {
            return ActionOutcome::NotPermitted;
        }
        if let Some(field) = first_empty(&[
            ("name", self.form.name.as_str()),
            ("description", self.form.description.as_str()),
        ]) {
            return ActionOutcome::Incomplete(field);
        }

        let payload = self.form.trimmed();
        match self
            .ctx
            .call(self.ctx.gateway().create_department(&payload))
            .await
        {
            Ok(_) => {
                self.ctx.alert("Department created");
                self.form = DepartmentInput::default();
                self.load().await;
                ActionOutcome::Completed
            }
            Err(e) => self.ctx.fail("creating department", &e),
        }
    }

    /// Open an editable copy of a listed department.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        self.edit = self.departments.iter().find(|d| d.id == id).cloned();
        self.edit.is_some()
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Send the edit buffer. The buffer is closed only on success.
    pub async fn submit_edit(&mut self) -> ActionOutcome {
        if !self.ctx.is_admin() {
            return ActionOutcome::NotPermitted;
        }
        let Some(edit) = &self.edit else {
            return ActionOutcome::Incomplete("department");
        };
        if let Some(field) = first_empty(&[
            ("name", edit.name.as_str()),
            ("description", edit.description.as_str()),
        ]) {
            return ActionOutcome::Incomplete(field);
        }

        let id = edit.id;
        let payload = DepartmentInput::from(edit).trimmed();
        match self
            .ctx
            .call(self.ctx.gateway().update_department(id, &payload))
            .await
        {
            Ok(_) => {
                self.ctx.alert("Department updated");
                self.edit = None;
                self.load().await;
                ActionOutcome::Completed
            }
            Err(e) => self.ctx.fail("updating department", &e),
        }
    }

    /// Delete after confirmation, then drop the row locally without
    /// refetching.
    pub async fn delete(&mut self, id: i64) -> ActionOutcome {
        if !self.ctx.is_admin() {
            return ActionOutcome::NotPermitted;
        }
        if !self
            .ctx
            .confirm("Are you sure you want to delete this department?")
        {
            return ActionOutcome::Declined;
        }
        match self.ctx.call(self.ctx.gateway().delete_department(id)).await {
            Ok(()) => {
                self.ctx.alert("Department deleted");
                self.departments.retain(|d| d.id != id);
                ActionOutcome::Completed
            }
            Err(e) => self.ctx.fail("deleting department", &e),
        }
    }
}
