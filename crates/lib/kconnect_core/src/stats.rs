//! Dashboard statistics.
//!
//! The backend has no aggregation endpoint, so the dashboard fetches each
//! department's reports and reduces them here.

use serde::Serialize;

use crate::models::{DepartmentStats, Report};

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Arithmetic mean of the scores, `0` when there are none.
pub fn average<I>(scores: I) -> f64
where
    I: IntoIterator<Item = i32>,
{
    let (sum, count) = scores
        .into_iter()
        .fold((0i64, 0u64), |(sum, count), s| (sum + i64::from(s), count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Average score of one department, rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentAverage {
    pub department_id: i64,
    pub name: String,
    pub average: f64,
}

/// One pie slice: a report's title and score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSlice {
    pub label: String,
    pub value: i32,
}

/// Headline figures for the administrator dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub departments: usize,
    pub total_employees: i64,
    pub total_reports: usize,
    /// Mean of the department averages, 1 decimal.
    pub overall_average: f64,
}

/// Administrator dashboard data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdminOverview {
    pub departments: Vec<DepartmentStats>,
    pub averages: Vec<DepartmentAverage>,
    pub scores: Vec<ScoreSlice>,
    pub summary: DashboardSummary,
}

impl AdminOverview {
    /// Reduce each department and its reports into chart data.
    ///
    /// Order follows the input departments.
    pub fn reduce(fetched: Vec<(DepartmentStats, Vec<Report>)>) -> Self {
        let mut departments = Vec::with_capacity(fetched.len());
        let mut averages = Vec::with_capacity(fetched.len());
        let mut scores = Vec::new();

        for (department, reports) in fetched {
            averages.push(DepartmentAverage {
                department_id: department.id,
                name: department.name.clone(),
                average: round_to(average(reports.iter().map(|r| r.score)), 2),
            });
            scores.extend(reports.into_iter().map(|r| ScoreSlice {
                label: r.title,
                value: r.score,
            }));
            departments.push(department);
        }

        let overall = if averages.is_empty() {
            0.0
        } else {
            averages.iter().map(|a| a.average).sum::<f64>() / averages.len() as f64
        };

        let summary = DashboardSummary {
            departments: departments.len(),
            total_employees: departments.iter().map(|d| d.employee_count).sum(),
            total_reports: scores.len(),
            overall_average: round_to(overall, 1),
        };

        Self {
            departments,
            averages,
            scores,
            summary,
        }
    }
}

/// Employee dashboard data: the caller's own reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeeOverview {
    pub reports: Vec<Report>,
    /// 1 decimal, `0` when there are no reports.
    pub average: f64,
    /// `0` when there are no reports.
    pub best: i32,
}

impl EmployeeOverview {
    pub fn from_reports(reports: Vec<Report>) -> Self {
        let average = round_to(average(reports.iter().map(|r| r.score)), 1);
        let best = reports.iter().map(|r| r.score).max().unwrap_or(0);
        Self {
            reports,
            average,
            best,
        }
    }

    /// Bar chart data: one bar per report.
    pub fn bars(&self) -> Vec<ScoreSlice> {
        self.reports
            .iter()
            .map(|r| ScoreSlice {
                label: r.title.clone(),
                value: r.score,
            })
            .collect()
    }
}
