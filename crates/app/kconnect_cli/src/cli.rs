use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use kconnect_client::config::DEFAULT_API_URL;
use kconnect_core::models::Role;

#[derive(Parser)]
#[command(name = "kconnect", about = "KConnect command line client", version)]
pub struct Cli {
    /// Backend base URL.
    #[arg(long, global = true, env = "KCONNECT_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// File holding the session cookie.
    #[arg(long, global = true, env = "KCONNECT_COOKIE_JAR")]
    pub cookie_jar: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session credential
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored credential
    Logout,
    /// Show the logged-in identity
    Whoami,
    /// Show the dashboard for your role
    Dashboard,
    /// Manage departments (administrators)
    Departments {
        #[command(subcommand)]
        command: DepartmentCommands,
    },
    /// Manage employees
    Employees {
        #[command(subcommand)]
        command: EmployeeCommands,
    },
    /// Manage performance reports
    Reports {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Print version
    Version,
}

#[derive(Args)]
pub struct Confirm {
    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum DepartmentCommands {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
    },
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Delete {
        id: i64,
        #[command(flatten)]
        confirm: Confirm,
    },
}

#[derive(Subcommand)]
pub enum EmployeeCommands {
    List,
    Create {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "EMPLOYEE")]
        role: Role,
        #[arg(long)]
        department_id: Option<i64>,
    },
    Edit {
        id: i64,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        department_id: Option<i64>,
    },
    Delete {
        id: i64,
        #[command(flatten)]
        confirm: Confirm,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    List {
        /// Department to show (administrators). Defaults to the first one.
        #[arg(long, conflicts_with = "all")]
        department: Option<i64>,
        /// Show reports across all departments (administrators).
        #[arg(long)]
        all: bool,
    },
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long, allow_negative_numbers = true)]
        score: i32,
    },
    Edit {
        id: i64,
        /// Department the report belongs to (administrators).
        #[arg(long)]
        department: Option<i64>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        score: Option<i32>,
    },
    Delete {
        id: i64,
        #[command(flatten)]
        confirm: Confirm,
    },
}
