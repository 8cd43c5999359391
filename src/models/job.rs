use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// A job posting. `applied` starts false and only the apply operation sets
// it; a generic update clears it again.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub experience: i32,
    pub lastdate: Option<NaiveDate>,
    pub applied: bool,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJob {
    pub title: String,
    pub description: String,
    pub experience: i32,
    pub lastdate: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateJob {
    pub title: String,
    pub description: String,
    pub experience: i32,
    pub lastdate: Option<NaiveDate>,
}
