//! Command handlers. Each gated command mounts the matching view, runs one
//! action and prints the result.

use log::debug;

use kconnect_client::config::default_cookie_jar;
use kconnect_client::{
    ActionOutcome, ClientConfig, CookieJar, DashboardView, DepartmentsView, EmployeesView,
    HttpGateway, ReportsView, Route, Session, ViewContext,
};
use kconnect_core::models::{DepartmentInput, RegisterRequest, ReportInput};

use crate::cli::{Cli, DepartmentCommands, EmployeeCommands, ReportCommands};
use crate::console::{self, ConsolePrompt};
use crate::{Error, Result};

pub struct App {
    session: Session<CookieJar>,
    gateway: HttpGateway,
}

/// Turn a view outcome into the command's result.
fn settle(outcome: ActionOutcome) -> Result<()> {
    match outcome {
        ActionOutcome::Completed => Ok(()),
        ActionOutcome::Declined => {
            println!("Aborted");
            Ok(())
        }
        ActionOutcome::Cancelled => Err(Error::Custom("Interrupted".into())),
        ActionOutcome::Failed => Err(Error::Custom("Request failed".into())),
        ActionOutcome::NotPermitted => Err(Error::Custom("Not permitted for your role".into())),
        ActionOutcome::Incomplete(field) => Err(Error::Custom(format!("Missing or invalid {field}"))),
    }
}

fn not_found(what: &str, id: i64) -> Error {
    Error::Custom(format!("No editable {what} with id {id}"))
}

impl App {
    pub fn new(cli: &Cli) -> Result<Self> {
        let cookie_jar = cli.cookie_jar.clone().unwrap_or_else(default_cookie_jar);
        let config = ClientConfig::new(&cli.api_url, cookie_jar)?;
        debug!("api {} jar {}", config.base_url, config.cookie_jar.display());

        let session = Session::init(CookieJar::new(&config.cookie_jar));
        let gateway = HttpGateway::new(&config)?;
        Ok(Self { session, gateway })
    }

    /// View context for the stored identity. Ctrl-C tears the view down.
    fn context(
        &self,
        route: Route,
        assume_yes: bool,
    ) -> Result<ViewContext<HttpGateway, ConsolePrompt>> {
        let gateway = self
            .gateway
            .clone()
            .with_credential(self.session.credential());
        let ctx = ViewContext::for_session(&self.session, gateway, ConsolePrompt::new(assume_yes))
            .ok_or(Error::NotLoggedIn)?;
        debug!("open {} view", route.label());

        let cancel = ctx.cancellation();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
        Ok(ctx)
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<Route> {
        let identity = self
            .session
            .login(&self.gateway, email, password)
            .await
            .map_err(|e| {
                debug!("login failed: {e}");
                Error::InvalidCredentials
            })?;
        println!("Logged in as {} ({})", identity.name, identity.role);
        Ok(Route::Dashboard)
    }

    pub fn logout(&mut self) -> Route {
        let route = self.session.logout();
        println!("Logged out");
        route
    }

    pub fn whoami(&self) -> Result<()> {
        let identity = self.session.identity().ok_or(Error::NotLoggedIn)?;
        console::print_identity(identity);
        Ok(())
    }

    /// The zeroed dashboard is still printed when loading fails.
    pub async fn dashboard(&self) -> Result<()> {
        let mut view = DashboardView::new(self.context(Route::Dashboard, false)?);
        let outcome = view.load().await;
        console::print_dashboard(view.dashboard());
        settle(outcome)
    }

    pub async fn departments(&self, command: DepartmentCommands) -> Result<()> {
        let assume_yes = matches!(&command, DepartmentCommands::Delete { confirm, .. } if confirm.yes);
        let mut view = DepartmentsView::new(self.context(Route::Departments, assume_yes)?);
        settle(view.load().await)?;

        match command {
            DepartmentCommands::List => console::print_departments(view.departments()),
            DepartmentCommands::Create { name, description } => {
                view.form = DepartmentInput { name, description };
                settle(view.create().await)?;
            }
            DepartmentCommands::Edit {
                id,
                name,
                description,
            } => {
                if !view.begin_edit(id) {
                    return Err(not_found("department", id));
                }
                if let Some(edit) = view.editing_mut() {
                    if let Some(name) = name {
                        edit.name = name;
                    }
                    if let Some(description) = description {
                        edit.description = description;
                    }
                }
                settle(view.submit_edit().await)?;
            }
            DepartmentCommands::Delete { id, .. } => settle(view.delete(id).await)?,
        }
        Ok(())
    }

    pub async fn employees(&self, command: EmployeeCommands) -> Result<()> {
        let assume_yes = matches!(&command, EmployeeCommands::Delete { confirm, .. } if confirm.yes);
        let mut view = EmployeesView::new(self.context(Route::Employees, assume_yes)?);
        settle(view.load().await)?;

        match command {
            EmployeeCommands::List => console::print_employees(view.employees()),
            EmployeeCommands::Create {
                full_name,
                email,
                password,
                role,
                department_id,
            } => {
                view.form = RegisterRequest {
                    full_name,
                    email,
                    password,
                    role,
                    department_id,
                };
                settle(view.create().await)?;
            }
            EmployeeCommands::Edit {
                id,
                full_name,
                department_id,
            } => {
                if !view.begin_edit(id) {
                    return Err(not_found("employee", id));
                }
                if let Some(edit) = view.editing_mut() {
                    if let Some(full_name) = full_name {
                        edit.full_name = full_name;
                    }
                    if department_id.is_some() {
                        edit.department_id = department_id;
                    }
                }
                settle(view.submit_edit().await)?;
            }
            EmployeeCommands::Delete { id, .. } => settle(view.delete(id).await)?,
        }
        Ok(())
    }

    pub async fn reports(&self, command: ReportCommands) -> Result<()> {
        let assume_yes = matches!(&command, ReportCommands::Delete { confirm, .. } if confirm.yes);
        let mut view = ReportsView::new(self.context(Route::Reports, assume_yes)?);
        settle(view.load().await)?;

        match command {
            ReportCommands::List { department, all } => {
                if all {
                    settle(view.filter(None).await)?;
                } else if let Some(id) = department {
                    settle(view.filter(Some(id)).await)?;
                }
                console::print_reports(view.reports());
            }
            ReportCommands::Create {
                title,
                description,
                score,
            } => {
                view.form = ReportInput {
                    title,
                    description,
                    score,
                };
                settle(view.create().await)?;
            }
            ReportCommands::Edit {
                id,
                department,
                title,
                description,
                score,
            } => {
                if let Some(department) = department {
                    settle(view.filter(Some(department)).await)?;
                }
                if !view.begin_edit(id) {
                    return Err(not_found("report", id));
                }
                if let Some(edit) = view.editing_mut() {
                    if let Some(title) = title {
                        edit.title = title;
                    }
                    if let Some(description) = description {
                        edit.description = description;
                    }
                    if let Some(score) = score {
                        edit.score = score;
                    }
                }
                settle(view.submit_edit().await)?;
            }
            ReportCommands::Delete { id, .. } => settle(view.delete(id).await)?,
        }
        Ok(())
    }
}
