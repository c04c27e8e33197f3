//! Endpoint paths, relative to the configured base URL.
//!
//! Named `METHOD_PATH`; templated segments are filled with [`with_param`].

pub const POST_AUTH_LOGIN: &str = "/auth/login";
pub const POST_AUTH_REGISTER: &str = "/auth/register";

pub const GET_DEPARTMENTS: &str = "/departments";
pub const POST_DEPARTMENTS: &str = "/departments";
pub const GET_DEPARTMENTS_STATS: &str = "/departments/stats";
pub const GET_DEPARTMENTS_ID: &str = "/departments/{id}";
pub const PUT_DEPARTMENTS_ID: &str = "/departments/{id}";
pub const DELETE_DEPARTMENTS_ID: &str = "/departments/{id}";

pub const GET_EMPLOYEES: &str = "/employees";
pub const GET_EMPLOYEES_ID: &str = "/employees/{id}";
pub const PUT_EMPLOYEES_ID: &str = "/employees/{id}";
pub const DELETE_EMPLOYEES_ID: &str = "/employees/{id}";

pub const GET_REPORTS: &str = "/reports";
pub const POST_REPORTS: &str = "/reports";
pub const GET_REPORTS_DEPARTMENT_DEPARTMENTID: &str = "/reports/department/{departmentId}";
pub const PUT_REPORTS_ID: &str = "/reports/{id}";
pub const DELETE_REPORTS_ID: &str = "/reports/{id}";

/// Substitute the first `{...}` segment of `template` with `value`.
pub fn with_param(template: &str, value: i64) -> String {
    match (template.find('{'), template.find('}')) {
        (Some(start), Some(end)) if start < end => {
            format!("{}{value}{}", &template[..start], &template[end + 1..])
        }
        _ => template.to_string(),
    }
}
