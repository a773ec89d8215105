use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: i64,
    pub user_id: i64,
    pub vacancy_id: i64,
    pub status: String,
    pub resume_file_url: String,
    pub notes: String,
    pub applied_at: DateTime<Utc>,
}

/// Application with the applicant columns partners see in the review list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationListRow {
    pub id: i64,
    pub user_id: i64,
    pub vacancy_id: i64,
    pub status: String,
    pub resume_file_url: String,
    pub notes: String,
    pub applied_at: DateTime<Utc>,
    pub applicant_name: String,
    pub applicant_email: String,
}
