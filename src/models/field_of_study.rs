use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Academic discipline tag used to match students to relevant vacancies.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FieldOfStudy {
    pub id: i64,
    pub name: String,
}
