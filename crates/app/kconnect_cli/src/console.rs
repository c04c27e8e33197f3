//! Terminal rendering and prompts.

use std::io::{self, BufRead, Write};

use kconnect_client::{Dashboard, Prompt, Route};
use kconnect_core::models::{Department, Employee, Identity, Report};
use kconnect_core::stats::{AdminOverview, EmployeeOverview};

/// Alerts go to stdout; confirmations read `y`/`n` from stdin unless
/// `assume_yes` is set.
pub struct ConsolePrompt {
    assume_yes: bool,
}

impl ConsolePrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompt for ConsolePrompt {
    fn alert(&self, message: &str) {
        println!("{message}");
    }

    fn confirm(&self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{question} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                log::warn!("failed to read confirmation: {e}");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn print_identity(identity: &Identity) {
    println!("{} <{}>", identity.name, identity.email);
    println!("role: {}", identity.role);
    println!("id:   {}", identity.id);
    println!("views: {}", navigation(&Route::HEADER));
}

/// Header navigation as a comma separated list of labels.
fn navigation(routes: &[Route]) -> String {
    routes
        .iter()
        .map(Route::label)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_departments(departments: &[Department]) {
    println!("{:>5}  {:<24}  DESCRIPTION", "ID", "NAME");
    for d in departments {
        println!("{:>5}  {:<24}  {}", d.id, d.name, d.description);
    }
}

pub fn print_employees(employees: &[Employee]) {
    println!(
        "{:>5}  {:<4}  {:<24}  {:<28}  {:<8}  DEPARTMENT",
        "ID", "", "NAME", "EMAIL", "ROLE"
    );
    for e in employees {
        let department = e
            .department_name
            .clone()
            .or_else(|| e.department_id.map(|id| format!("#{id}")))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>5}  {:<4}  {:<24}  {:<28}  {:<8}  {}",
            e.id,
            e.initials(),
            e.full_name,
            e.email,
            e.role.as_str(),
            department
        );
    }
}

pub fn print_reports(reports: &[Report]) {
    println!(
        "{:>5}  {:<24}  {:>5}  {:<9}  {:<20}  DEPARTMENT",
        "ID", "TITLE", "SCORE", "BAND", "EMPLOYEE"
    );
    for r in reports {
        println!(
            "{:>5}  {:<24}  {:>5}  {:<9}  {:<20}  {}",
            r.id,
            r.title,
            r.score,
            r.band().as_str(),
            r.employee_name.as_deref().unwrap_or("-"),
            r.department_name.as_deref().unwrap_or("-"),
        );
    }
}

pub fn print_dashboard(dashboard: &Dashboard) {
    match dashboard {
        Dashboard::Admin(overview) => print_admin(overview),
        Dashboard::Employee(overview) => print_employee(overview),
    }
}

fn print_admin(overview: &AdminOverview) {
    let summary = &overview.summary;
    println!("Departments:     {}", summary.departments);
    println!("Employees:       {}", summary.total_employees);
    println!("Reports:         {}", summary.total_reports);
    println!("Average score:   {:.1}", summary.overall_average);
    println!();
    println!("{:<24}  {:>9}  AVERAGE", "DEPARTMENT", "EMPLOYEES");
    for (department, average) in overview.departments.iter().zip(&overview.averages) {
        println!(
            "{:<24}  {:>9}  {:.2}",
            department.name, department.employee_count, average.average
        );
    }
    if !overview.scores.is_empty() {
        println!();
        println!("{:<24}  SCORE", "REPORT");
        for slice in &overview.scores {
            println!("{:<24}  {:>5}", slice.label, slice.value);
        }
    }
}

fn print_employee(overview: &EmployeeOverview) {
    println!("Reports:         {}", overview.reports.len());
    println!("Average score:   {:.1}", overview.average);
    println!("Best score:      {}", overview.best);
    let bars = overview.bars();
    if !bars.is_empty() {
        println!();
        for bar in bars {
            let width = usize::try_from(bar.value / 5).unwrap_or(0);
            println!("{:<24}  {:>3} {}", bar.label, bar.value, "#".repeat(width));
        }
    }
}
