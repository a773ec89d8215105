use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vacancy {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub company_id: i64,
    pub field_id: Option<i64>,
    pub is_active: bool,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub city: String,
    pub address: String,
    pub employment_type: Option<String>,
    pub experience: Option<String>,
    pub schedule: Option<String>,
    pub response_type: Option<String>,
    pub response_destination: String,
    pub requirements: String,
    pub responsibilities: String,
    pub conditions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing row: vacancy plus the company (and field) columns it is always
/// presented with, fetched in one joined query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacancyListRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub company_id: i64,
    pub field_id: Option<i64>,
    pub is_active: bool,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub city: String,
    pub address: String,
    pub employment_type: Option<String>,
    pub experience: Option<String>,
    pub schedule: Option<String>,
    pub response_type: Option<String>,
    pub response_destination: String,
    pub requirements: String,
    pub responsibilities: String,
    pub conditions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub company_name: String,
    pub company_industry: String,
    pub field_name: Option<String>,
}
