//! Navigation targets.

use std::fmt;

/// A top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Reports,
    Employees,
    Departments,
}

impl Route {
    /// Entries of the header navigation, in display order.
    pub const HEADER: [Route; 3] = [Route::Dashboard, Route::Reports, Route::Employees];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Reports => "/reports",
            Route::Employees => "/employees",
            Route::Departments => "/departments",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Reports => "Reports",
            Route::Employees => "Employees",
            Route::Departments => "Departments",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
