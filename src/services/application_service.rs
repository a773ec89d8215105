use crate::dto::application_dto::ApplyPayload;
use crate::error::{Error, Result};
use crate::models::application::{Application, ApplicationListRow};
use crate::models::enums::ApplicationStatus;
use crate::services::history_service::HistoryService;
use sqlx::PgPool;

const APPLICATION_COLUMNS: &str =
    "id, user_id, vacancy_id, status, resume_file_url, notes, applied_at";

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One application per (user, vacancy). The duplicate is rejected before
    /// the insert is attempted; the UNIQUE constraint backs it up.
    pub async fn apply(
        &self,
        vacancy_id: i64,
        user_id: i64,
        payload: ApplyPayload,
    ) -> Result<Application> {
        let vacancy_exists = sqlx::query_scalar::<_, i64>("SELECT id FROM vacancies WHERE id = $1")
            .bind(vacancy_id)
            .fetch_optional(&self.pool)
            .await?;
        if vacancy_exists.is_none() {
            return Err(Error::NotFound("Vacancy not found".to_string()));
        }

        let duplicate = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM applications WHERE user_id = $1 AND vacancy_id = $2",
        )
        .bind(user_id)
        .bind(vacancy_id)
        .fetch_optional(&self.pool)
        .await?;
        if duplicate.is_some() {
            return Err(Error::Conflict(
                "You have already applied to this vacancy".to_string(),
            ));
        }

        let sql = format!(
            "INSERT INTO applications (user_id, vacancy_id, status, resume_file_url, notes) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            APPLICATION_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let application = sqlx::query_as::<_, Application>(&sql)
            .bind(user_id)
            .bind(vacancy_id)
            .bind(ApplicationStatus::Pending.code())
            .bind(payload.resume_file_url.as_deref().unwrap_or(""))
            .bind(payload.notes.as_deref().unwrap_or(""))
            .fetch_one(&mut *tx)
            .await?;
        HistoryService::record(
            &mut tx,
            "application",
            application.id,
            "create",
            serde_json::to_value(&application)?,
            Some(user_id),
        )
        .await?;
        tx.commit().await?;

        tracing::info!(application_id = application.id, vacancy_id, "application submitted");
        Ok(application)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Application> {
        let sql = format!(
            "SELECT {} FROM applications WHERE id = $1",
            APPLICATION_COLUMNS
        );
        let application = sqlx::query_as::<_, Application>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        application.ok_or_else(|| Error::NotFound("Application not found".to_string()))
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: &str,
        changed_by: Option<i64>,
    ) -> Result<Application> {
        let status = ApplicationStatus::parse(status)
            .ok_or_else(|| Error::BadRequest("Invalid application status".to_string()))?;

        let sql = format!(
            "UPDATE applications SET status = $2 WHERE id = $1 RETURNING {}",
            APPLICATION_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let application = sqlx::query_as::<_, Application>(&sql)
            .bind(id)
            .bind(status.code())
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;
        HistoryService::record(
            &mut tx,
            "application",
            application.id,
            "status_change",
            serde_json::to_value(&application)?,
            changed_by,
        )
        .await?;
        tx.commit().await?;

        Ok(application)
    }

    pub async fn list_for_vacancy(&self, vacancy_id: i64) -> Result<Vec<ApplicationListRow>> {
        let rows = sqlx::query_as::<_, ApplicationListRow>(
            r#"
            SELECT a.id, a.user_id, a.vacancy_id, a.status, a.resume_file_url, a.notes,
                   a.applied_at, u.full_name AS applicant_name, u.email AS applicant_email
            FROM applications a
            JOIN users u ON u.id = a.user_id
            WHERE a.vacancy_id = $1
            ORDER BY a.applied_at DESC
            "#,
        )
        .bind(vacancy_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
