use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Role;

/// Employee as returned by `GET /employees`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    /// Immutable once the employee exists.
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default)]
    pub department_name: Option<String>,
}

impl Employee {
    /// Initials shown on the profile card ("Ana María Ruiz" → "AMR").
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// `POST /auth/register` body; employees are created through registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub department_id: Option<i64>,
}

impl RegisterRequest {
    /// Trims name and email. The password is sent as typed.
    pub fn trimmed(&self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
            department_id: self.department_id,
        }
    }
}

impl Default for RegisterRequest {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Employee,
            department_id: None,
        }
    }
}

/// `PUT /employees/{id}` body: the mutable subset of an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub full_name: String,
    pub department_id: Option<i64>,
}

impl From<&Employee> for EmployeeUpdate {
    fn from(e: &Employee) -> Self {
        Self {
            full_name: e.full_name.trim().to_string(),
            department_id: e.department_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(name: &str) -> Employee {
        Employee {
            id: 1,
            full_name: name.into(),
            email: "x@kconnect.io".into(),
            role: Role::Employee,
            hire_date: None,
            department_id: Some(2),
            department_name: Some("Eng".into()),
        }
    }

    #[test]
    fn initials_take_first_letter_of_each_word() {
        assert_eq!(employee("ana maría  ruiz").initials(), "AMR");
        assert_eq!(employee("").initials(), "");
    }

    #[test]
    fn update_carries_only_mutable_fields() {
        let update = EmployeeUpdate::from(&employee("  Ana  "));
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"fullName": "Ana", "departmentId": 2}));
    }

    #[test]
    fn register_request_uses_camel_case() {
        let req = RegisterRequest {
            full_name: " Ana ".into(),
            email: " ana@kconnect.io ".into(),
            password: " secret1234".into(),
            role: Role::Admin,
            department_id: None,
        }
        .trimmed();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["fullName"], "Ana");
        assert_eq!(json["email"], "ana@kconnect.io");
        assert_eq!(json["password"], " secret1234");
        assert_eq!(json["role"], "ADMIN");
        assert!(json["departmentId"].is_null());
    }
}
