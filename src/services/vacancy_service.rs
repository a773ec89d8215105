use crate::dto::vacancy_dto::{CreateVacancyPayload, UpdateVacancyPayload};
use crate::error::{Error, Result};
use crate::filters::VacancyFilter;
use crate::models::vacancy::{Vacancy, VacancyListRow};
use crate::services::history_service::HistoryService;
use sqlx::{PgPool, Postgres, QueryBuilder};

/// Column list shared by every read that presents a vacancy together with
/// its company (and optional field of study) in one joined query.
const LIST_COLUMNS: &str = "v.id, v.title, v.description, v.company_id, v.field_id, v.is_active, \
     v.salary_min, v.salary_max, v.city, v.address, v.employment_type, v.experience, v.schedule, \
     v.response_type, v.response_destination, v.requirements, v.responsibilities, v.conditions, \
     v.created_at, v.updated_at, c.name AS company_name, c.industry AS company_industry, \
     f.name AS field_name";

const LIST_FROM: &str = " FROM vacancies v \
     JOIN companies c ON c.id = v.company_id \
     LEFT JOIN fields_of_study f ON f.id = v.field_id \
     WHERE 1=1";

const VACANCY_COLUMNS: &str = "id, title, description, company_id, field_id, is_active, \
     salary_min, salary_max, city, address, employment_type, experience, schedule, \
     response_type, response_destination, requirements, responsibilities, conditions, \
     created_at, updated_at";

#[derive(Clone)]
pub struct VacancyService {
    pool: PgPool,
}

pub struct VacancyList {
    pub items: Vec<VacancyListRow>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl VacancyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn field_exists(&self, field_id: i64) -> Result<bool> {
        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM fields_of_study WHERE id = $1")
            .bind(field_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    async fn company_exists(&self, company_id: i64) -> Result<bool> {
        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM companies WHERE id = $1")
            .bind(company_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    /// Filtered, paginated listing with companies fetched in the same query.
    /// `company_scope` narrows to one company's vacancies (the "mine" scope).
    pub async fn list(
        &self,
        filter: &VacancyFilter,
        page: i64,
        per_page: i64,
        company_scope: Option<i64>,
    ) -> Result<VacancyList> {
        // The specialization id was only syntactically validated so far; an
        // unresolvable id is a client error, not an empty result.
        if let Some(field_id) = filter.field_id {
            if !self.field_exists(field_id).await? {
                return Err(Error::BadRequest("Invalid specialization".to_string()));
            }
        }

        let page = page.max(1);
        let per_page = per_page.clamp(1, 100);
        let offset = (page - 1) * per_page;

        let mut items_qb =
            QueryBuilder::<Postgres>::new(format!("SELECT {}{}", LIST_COLUMNS, LIST_FROM));
        filter.push_predicates(&mut items_qb);
        if let Some(company_id) = company_scope {
            items_qb.push(" AND v.company_id = ").push_bind(company_id);
        }
        items_qb.push(" ORDER BY ").push(filter.ordering.sql());
        items_qb
            .push(" LIMIT ")
            .push_bind(per_page)
            .push(" OFFSET ")
            .push_bind(offset);
        let items = items_qb
            .build_query_as::<VacancyListRow>()
            .fetch_all(&self.pool)
            .await?;

        let mut total_qb = QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*){}", LIST_FROM));
        filter.push_predicates(&mut total_qb);
        if let Some(company_id) = company_scope {
            total_qb.push(" AND v.company_id = ").push_bind(company_id);
        }
        let total = total_qb
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        let total_pages = ((total as f64) / (per_page as f64)).ceil() as i64;

        Ok(VacancyList {
            items,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<VacancyListRow> {
        let sql = format!("SELECT {}{} AND v.id = $1", LIST_COLUMNS, LIST_FROM);
        let row = sqlx::query_as::<_, VacancyListRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.ok_or_else(|| Error::NotFound("Vacancy not found".to_string()))
    }

    pub async fn create(
        &self,
        payload: CreateVacancyPayload,
        changed_by: Option<i64>,
    ) -> Result<VacancyListRow> {
        payload.validate_payload()?;

        if !self.company_exists(payload.company_id).await? {
            return Err(Error::BadRequest("Invalid company".to_string()));
        }
        if let Some(field_id) = payload.field_id {
            if !self.field_exists(field_id).await? {
                return Err(Error::BadRequest("Invalid field of study".to_string()));
            }
        }

        let sql = format!(
            "INSERT INTO vacancies (title, description, company_id, field_id, is_active, \
             salary_min, salary_max, city, address, employment_type, experience, schedule, \
             response_type, response_destination, requirements, responsibilities, conditions) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING {}",
            VACANCY_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let vacancy = sqlx::query_as::<_, Vacancy>(&sql)
            .bind(payload.title.trim())
            .bind(payload.description.trim())
            .bind(payload.company_id)
            .bind(payload.field_id)
            .bind(payload.is_active.unwrap_or(true))
            .bind(payload.salary_min)
            .bind(payload.salary_max)
            .bind(payload.city.trim())
            .bind(payload.address.trim())
            .bind(&payload.employment_type)
            .bind(&payload.experience)
            .bind(&payload.schedule)
            .bind(&payload.response_type)
            .bind(payload.response_destination.trim())
            .bind(payload.requirements.trim())
            .bind(payload.responsibilities.trim())
            .bind(payload.conditions.trim())
            .fetch_one(&mut *tx)
            .await?;
        HistoryService::record(
            &mut tx,
            "vacancy",
            vacancy.id,
            "create",
            serde_json::to_value(&vacancy)?,
            changed_by,
        )
        .await?;
        tx.commit().await?;

        tracing::info!(vacancy_id = vacancy.id, "vacancy created");
        self.get_by_id(vacancy.id).await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: UpdateVacancyPayload,
        changed_by: Option<i64>,
    ) -> Result<VacancyListRow> {
        let current = self.get_by_id(id).await?;
        // Salary bounds must hold on the row as it will be after the merge.
        payload.validate_payload(current.salary_min, current.salary_max)?;

        if let Some(field_id) = payload.field_id {
            if !self.field_exists(field_id).await? {
                return Err(Error::BadRequest("Invalid field of study".to_string()));
            }
        }

        let sql = format!(
            "UPDATE vacancies SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                field_id = COALESCE($4, field_id), \
                is_active = COALESCE($5, is_active), \
                salary_min = COALESCE($6, salary_min), \
                salary_max = COALESCE($7, salary_max), \
                city = COALESCE($8, city), \
                address = COALESCE($9, address), \
                employment_type = COALESCE($10, employment_type), \
                experience = COALESCE($11, experience), \
                schedule = COALESCE($12, schedule), \
                response_type = COALESCE($13, response_type), \
                response_destination = COALESCE($14, response_destination), \
                requirements = COALESCE($15, requirements), \
                responsibilities = COALESCE($16, responsibilities), \
                conditions = COALESCE($17, conditions), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {}",
            VACANCY_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let vacancy = sqlx::query_as::<_, Vacancy>(&sql)
            .bind(id)
            .bind(payload.title.as_deref().map(str::trim))
            .bind(payload.description.as_deref().map(str::trim))
            .bind(payload.field_id)
            .bind(payload.is_active)
            .bind(payload.salary_min)
            .bind(payload.salary_max)
            .bind(payload.city.as_deref().map(str::trim))
            .bind(payload.address.as_deref().map(str::trim))
            .bind(&payload.employment_type)
            .bind(&payload.experience)
            .bind(&payload.schedule)
            .bind(&payload.response_type)
            .bind(payload.response_destination.as_deref().map(str::trim))
            .bind(payload.requirements.as_deref().map(str::trim))
            .bind(payload.responsibilities.as_deref().map(str::trim))
            .bind(payload.conditions.as_deref().map(str::trim))
            .fetch_one(&mut *tx)
            .await?;
        HistoryService::record(
            &mut tx,
            "vacancy",
            vacancy.id,
            "update",
            serde_json::to_value(&vacancy)?,
            changed_by,
        )
        .await?;
        tx.commit().await?;

        self.get_by_id(id).await
    }

    /// Restricted single-field update: flips `is_active` off without
    /// re-validating the record. Safe to call repeatedly.
    pub async fn archive(&self, id: i64, changed_by: Option<i64>) -> Result<VacancyListRow> {
        let sql = format!(
            "UPDATE vacancies SET is_active = FALSE, updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            VACANCY_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let vacancy = sqlx::query_as::<_, Vacancy>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| Error::NotFound("Vacancy not found".to_string()))?;
        HistoryService::record(
            &mut tx,
            "vacancy",
            vacancy.id,
            "archive",
            serde_json::to_value(&vacancy)?,
            changed_by,
        )
        .await?;
        tx.commit().await?;

        tracing::info!(vacancy_id = id, "vacancy archived");
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i64, changed_by: Option<i64>) -> Result<()> {
        let sql = format!("SELECT {} FROM vacancies WHERE id = $1", VACANCY_COLUMNS);

        let mut tx = self.pool.begin().await?;
        let vacancy = sqlx::query_as::<_, Vacancy>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| Error::NotFound("Vacancy not found".to_string()))?;
        // Snapshot of the final state survives the row itself.
        HistoryService::record(
            &mut tx,
            "vacancy",
            vacancy.id,
            "delete",
            serde_json::to_value(&vacancy)?,
            changed_by,
        )
        .await?;
        sqlx::query("DELETE FROM vacancies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(())
    }

    /// A company's active vacancies, newest first, for the XLSX export.
    pub async fn list_for_export(&self, company_id: i64) -> Result<Vec<VacancyListRow>> {
        let sql = format!(
            "SELECT {}{} AND v.company_id = $1 AND v.is_active = TRUE ORDER BY v.created_at DESC",
            LIST_COLUMNS, LIST_FROM
        );
        let rows = sqlx::query_as::<_, VacancyListRow>(&sql)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
