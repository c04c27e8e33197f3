//! Dashboard aggregation.
//!
//! Administrators get per-department averages computed client-side: one
//! stats call, then one reports call per department fanned out on a
//! [`JoinSet`]. Employees get their own reports from a single call.

use tokio::task::JoinSet;
use tracing::{debug, error};

use kconnect_core::models::{Identity, Report, Role};
use kconnect_core::stats::{AdminOverview, EmployeeOverview};

use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;
use crate::view::{ActionOutcome, Prompt, ViewContext};

/// Dashboard data for one role.
#[derive(Debug, Clone, PartialEq)]
pub enum Dashboard {
    Admin(AdminOverview),
    Employee(EmployeeOverview),
}

impl Dashboard {
    /// Zeroed dashboard for `role`.
    pub fn empty(role: Role) -> Self {
        match role {
            Role::Admin => Dashboard::Admin(AdminOverview::default()),
            Role::Employee => Dashboard::Employee(EmployeeOverview::default()),
        }
    }
}

/// Fetch and reduce the administrator dashboard.
///
/// All department fetches must succeed. The first failure aborts the rest
/// and is returned as [`ClientError::Aggregation`]. Dropping the returned
/// future aborts every in-flight fetch.
pub async fn admin_overview<G>(gateway: &G) -> ClientResult<AdminOverview>
where
    G: Gateway + Clone + 'static,
{
    let departments = gateway.department_stats().await?;
    debug!(departments = departments.len(), "fetching department reports");

    let mut tasks = JoinSet::new();
    for (index, department) in departments.iter().enumerate() {
        let gateway = gateway.clone();
        let department_id = department.id;
        tasks.spawn(async move {
            let result = gateway.reports_by_department(department_id).await;
            (index, department_id, result)
        });
    }

    let mut fetched: Vec<Vec<Report>> = vec![Vec::new(); departments.len()];
    while let Some(joined) = tasks.join_next().await {
        let (index, department_id, result) =
            joined.map_err(|e| ClientError::Task(e.to_string()))?;
        match result {
            Ok(reports) => fetched[index] = reports,
            Err(source) => {
                tasks.abort_all();
                return Err(ClientError::Aggregation {
                    department_id,
                    source: Box::new(source),
                });
            }
        }
    }

    Ok(AdminOverview::reduce(
        departments.into_iter().zip(fetched).collect(),
    ))
}

/// Fetch the caller's own reports.
pub async fn employee_overview<G: Gateway + ?Sized>(gateway: &G) -> ClientResult<EmployeeOverview> {
    let reports = gateway.my_reports().await?;
    Ok(EmployeeOverview::from_reports(reports))
}

/// Dashboard for the identity's role.
pub async fn aggregate<G>(gateway: &G, identity: &Identity) -> ClientResult<Dashboard>
where
    G: Gateway + Clone + 'static,
{
    match identity.role {
        Role::Admin => admin_overview(gateway).await.map(Dashboard::Admin),
        Role::Employee => employee_overview(gateway).await.map(Dashboard::Employee),
    }
}

pub struct DashboardView<G, P> {
    ctx: ViewContext<G, P>,
    dashboard: Dashboard,
}

impl<G, P> DashboardView<G, P>
where
    G: Gateway + Clone + 'static,
    P: Prompt,
{
    pub fn new(ctx: ViewContext<G, P>) -> Self {
        let dashboard = Dashboard::empty(ctx.identity().role);
        Self { ctx, dashboard }
    }

    pub async fn mount(ctx: ViewContext<G, P>) -> Self {
        let mut view = Self::new(ctx);
        view.load().await;
        view
    }

    pub fn context(&self) -> &ViewContext<G, P> {
        &self.ctx
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Run the aggregation.
    ///
    /// Failure zeroes the dashboard and is logged; no partial results are
    /// kept. Teardown discards the result and leaves the state untouched.
    pub async fn load(&mut self) -> ActionOutcome {
        let role = self.ctx.identity().role;
        match self
            .ctx
            .call(aggregate(self.ctx.gateway(), self.ctx.identity()))
            .await
        {
            Ok(dashboard) => {
                self.dashboard = dashboard;
                ActionOutcome::Completed
            }
            Err(ClientError::Cancelled) => {
                debug!("dashboard torn down, aggregation discarded");
                ActionOutcome::Cancelled
            }
            Err(e) => {
                error!(error = %e, "failed to load dashboard");
                self.dashboard = Dashboard::empty(role);
                ActionOutcome::Failed
            }
        }
    }
}
