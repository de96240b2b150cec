use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A grading record for one project path. `grade` stays null until the
/// project has actually been graded; aggregation drops ungraded rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub path: String,

    pub grade: Option<f64>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
