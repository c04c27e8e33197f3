use serde::{Deserialize, Serialize};

/// Department as returned by `GET /departments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Department with head count, from `GET /departments/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    pub id: i64,
    pub name: String,
    pub employee_count: i64,
}

/// Create/update body for departments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentInput {
    pub name: String,
    pub description: String,
}

impl DepartmentInput {
    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

impl From<&Department> for DepartmentInput {
    fn from(d: &Department) -> Self {
        Self {
            name: d.name.clone(),
            description: d.description.clone(),
        }
    }
}
