use serde::{Deserialize, Serialize};

use crate::models::application::{Application, ApplicationListRow};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApplyPayload {
    pub resume_file_url: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateApplicationStatusPayload {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub id: i64,
    pub user_id: i64,
    pub vacancy_id: i64,
    pub status: String,
    pub resume_file_url: String,
    pub notes: String,
    pub applied_at: chrono::DateTime<chrono::Utc>,
}

impl From<Application> for ApplicationResponse {
    fn from(value: Application) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            vacancy_id: value.vacancy_id,
            status: value.status,
            resume_file_url: value.resume_file_url,
            notes: value.notes,
            applied_at: value.applied_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationListItem {
    pub id: i64,
    pub vacancy_id: i64,
    pub status: String,
    pub resume_file_url: String,
    pub notes: String,
    pub applied_at: chrono::DateTime<chrono::Utc>,
    pub applicant_name: String,
    pub applicant_email: String,
}

impl From<ApplicationListRow> for ApplicationListItem {
    fn from(row: ApplicationListRow) -> Self {
        Self {
            id: row.id,
            vacancy_id: row.vacancy_id,
            status: row.status,
            resume_file_url: row.resume_file_url,
            notes: row.notes,
            applied_at: row.applied_at,
            applicant_name: row.applicant_name,
            applicant_email: row.applicant_email,
        }
    }
}
