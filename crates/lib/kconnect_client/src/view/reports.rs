//! Performance reports.
//!
//! Administrators browse by department (initially the first one); employees
//! see the reports the backend scopes to them. Anyone may file a report.

use kconnect_core::models::{Department, Report, ReportInput};
use kconnect_core::score::SCORE_RANGE;

use super::{ActionOutcome, Prompt, ViewContext, first_empty};
use crate::gateway::Gateway;

pub struct ReportsView<G, P> {
    ctx: ViewContext<G, P>,
    reports: Vec<Report>,
    departments: Vec<Department>,
    filter: Option<i64>,
    pub form: ReportInput,
    edit: Option<Report>,
}

fn check(input: &ReportInput) -> Option<&'static str> {
    first_empty(&[
        ("title", input.title.as_str()),
        ("description", input.description.as_str()),
    ])
    .or_else(|| (!SCORE_RANGE.contains(&input.score)).then_some("score"))
}

impl<G: Gateway, P: Prompt> ReportsView<G, P> {
    pub fn new(ctx: ViewContext<G, P>) -> Self {
        Self {
            ctx,
            reports: Vec::new(),
            departments: Vec::new(),
            filter: None,
            form: ReportInput::default(),
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

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Department filter choices. Empty for employees.
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Department currently shown to an administrator.
    pub fn current_filter(&self) -> Option<i64> {
        self.filter
    }

    pub fn editing(&self) -> Option<&Report> {
        self.edit.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut Report> {
        self.edit.as_mut()
    }

    /// Initial load.
    ///
    /// Admins fetch departments first and then the first department's
    /// reports. With no departments the list stays empty.
    pub async fn load(&mut self) -> ActionOutcome {
        if !self.ctx.is_admin() {
            return self.refresh().await;
        }

        match self.ctx.call(self.ctx.gateway().list_departments()).await {
            Ok(departments) => self.departments = departments,
            Err(e) => return self.ctx.fail("loading departments", &e),
        }
        match self.departments.first() {
            Some(first) => {
                self.filter = Some(first.id);
                self.refresh().await
            }
            None => {
                self.filter = None;
                self.reports.clear();
                ActionOutcome::Completed
            }
        }
    }

    /// Refetch the list for the current role and filter.
    pub async fn refresh(&mut self) -> ActionOutcome {
        let gateway = self.ctx.gateway();
        let fetched = match (self.ctx.is_admin(), self.filter) {
            (true, Some(department_id)) => {
                self.ctx
                    .call(gateway.reports_by_department(department_id))
                    .await
            }
            _ => self.ctx.call(gateway.my_reports()).await,
        };
        match fetched {
            Ok(reports) => {
                self.reports = reports;
                ActionOutcome::Completed
            }
            Err(e) => self.ctx.fail("loading reports", &e),
        }
    }

    /// Switch the department filter. `None` shows the unfiltered list.
    pub async fn filter(&mut self, department_id: Option<i64>) -> ActionOutcome {
        if !self.ctx.is_admin() {
            return ActionOutcome::NotPermitted;
        }
        self.filter = department_id;
        self.refresh().await
    }

    pub async fn create(&mut self) -> ActionOutcome {
        if let Some(field) = check(&self.form) {
            return ActionOutcome::Incomplete(field);
        }

        let payload = self.form.trimmed();
        match self.ctx.call(self.ctx.gateway().create_report(&payload)).await {
            Ok(_) => {
                self.ctx.alert("Report created");
                self.form = ReportInput::default();
                self.refresh().await;
                ActionOutcome::Completed
            }
            Err(e) => self.ctx.fail("creating report", &e),
        }
    }

    pub fn begin_edit(&mut self, id: i64) -> bool {
        self.edit = self.reports.iter().find(|r| r.id == id).cloned();
        self.edit.is_some()
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    pub async fn submit_edit(&mut self) -> ActionOutcome {
        let Some(edit) = &self.edit else {
            return ActionOutcome::Incomplete("report");
        };
        let payload = ReportInput::from(edit).trimmed();
        if let Some(field) = check(&payload) {
            return ActionOutcome::Incomplete(field);
        }

        let id = edit.id;
        match self
            .ctx
            .call(self.ctx.gateway().update_report(id, &payload))
            .await
        {
            Ok(_) => {
                self.ctx.alert("Report updated");
                self.edit = None;
                self.refresh().await;
                ActionOutcome::Completed
            }
            Err(e) => self.ctx.fail("updating report", &e),
        }
    }

    pub async fn delete(&mut self, id: i64) -> ActionOutcome {
        if !self.ctx.is_admin() {
            return ActionOutcome::NotPermitted;
        }
        if !self
            .ctx
            .confirm("Are you sure you want to delete this report?")
        {
            return ActionOutcome::Declined;
        }
        match self.ctx.call(self.ctx.gateway().delete_report(id)).await {
            Ok(()) => {
                self.ctx.alert("Report deleted");
                self.reports.retain(|r| r.id != id);
                ActionOutcome::Completed
            }
            Err(e) => self.ctx.fail("deleting report", &e),
        }
    }
}
