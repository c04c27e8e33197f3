use serde::{Deserialize, Serialize};

use crate::score::{self, ScoreBand};

/// Performance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub description: String,
    /// 0–100.
    pub score: i32,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Report {
    pub fn band(&self) -> ScoreBand {
        score::classify(self.score)
    }
}

/// Create/update body for reports. The backend assigns the author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportInput {
    pub title: String,
    pub description: String,
    pub score: i32,
}

impl ReportInput {
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            score: self.score,
        }
    }
}

impl From<&Report> for ReportInput {
    fn from(r: &Report) -> Self {
        Self {
            title: r.title.clone(),
            description: r.description.clone(),
            score: r.score,
        }
    }
}
