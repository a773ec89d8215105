use crate::dto::company_dto::{CreateCompanyPayload, UpdateCompanyPayload};
use crate::error::{Error, Result};
use crate::models::company::Company;
use crate::services::history_service::HistoryService;
use sqlx::PgPool;

const COMPANY_COLUMNS: &str = "id, name, description, industry, logo_url, created_at, updated_at";

#[derive(Clone)]
pub struct CompanyService {
    pool: PgPool,
}

impl CompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Company>> {
        let sql = format!("SELECT {} FROM companies ORDER BY name", COMPANY_COLUMNS);
        let companies = sqlx::query_as::<_, Company>(&sql).fetch_all(&self.pool).await?;
        Ok(companies)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Company> {
        let sql = format!("SELECT {} FROM companies WHERE id = $1", COMPANY_COLUMNS);
        let company = sqlx::query_as::<_, Company>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        company.ok_or_else(|| Error::NotFound("Company not found".to_string()))
    }

    pub async fn create(
        &self,
        payload: CreateCompanyPayload,
        changed_by: Option<i64>,
    ) -> Result<Company> {
        payload.validate_payload()?;

        let sql = format!(
            "INSERT INTO companies (name, description, industry, logo_url) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            COMPANY_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let company = sqlx::query_as::<_, Company>(&sql)
            .bind(payload.name.trim())
            .bind(payload.description.trim())
            .bind(payload.industry.trim())
            .bind(&payload.logo_url)
            .fetch_one(&mut *tx)
            .await?;
        HistoryService::record(
            &mut tx,
            "company",
            company.id,
            "create",
            serde_json::to_value(&company)?,
            changed_by,
        )
        .await?;
        tx.commit().await?;

        tracing::info!(company_id = company.id, "company created");
        Ok(company)
    }

    pub async fn update(
        &self,
        id: i64,
        payload: UpdateCompanyPayload,
        changed_by: Option<i64>,
    ) -> Result<Company> {
        self.get_by_id(id).await?;
        payload.validate_payload()?;

        let sql = format!(
            "UPDATE companies SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                industry = COALESCE($4, industry), \
                logo_url = COALESCE($5, logo_url), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            COMPANY_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let company = sqlx::query_as::<_, Company>(&sql)
            .bind(id)
            .bind(payload.name.as_deref().map(str::trim))
            .bind(payload.description.as_deref().map(str::trim))
            .bind(payload.industry.as_deref().map(str::trim))
            .bind(&payload.logo_url)
            .fetch_one(&mut *tx)
            .await?;
        HistoryService::record(
            &mut tx,
            "company",
            company.id,
            "update",
            serde_json::to_value(&company)?,
            changed_by,
        )
        .await?;
        tx.commit().await?;

        Ok(company)
    }

    /// Removing a company cascades to its vacancies and users at the store
    /// level; the snapshot keeps the final state reachable.
    pub async fn delete(&self, id: i64, changed_by: Option<i64>) -> Result<()> {
        let company = self.get_by_id(id).await?;

        let mut tx = self.pool.begin().await?;
        HistoryService::record(
            &mut tx,
            "company",
            company.id,
            "delete",
            serde_json::to_value(&company)?,
            changed_by,
        )
        .await?;
        sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(())
    }
}
