use crate::dto::field_dto::CreateFieldPayload;
use crate::error::{Error, Result};
use crate::models::field_of_study::FieldOfStudy;
use sqlx::PgPool;

#[derive(Clone)]
pub struct FieldService {
    pool: PgPool,
}

impl FieldService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<FieldOfStudy>> {
        let fields =
            sqlx::query_as::<_, FieldOfStudy>("SELECT id, name FROM fields_of_study ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(fields)
    }

    pub async fn create(&self, payload: CreateFieldPayload) -> Result<FieldOfStudy> {
        payload.validate_payload()?;
        let name = payload.name.trim();

        // Uniqueness is checked up front; the UNIQUE constraint stays as the
        // last line of defence under concurrent inserts.
        let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM fields_of_study WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_some() {
            return Err(Error::Conflict(
                "Field of study with this name already exists".to_string(),
            ));
        }

        let field = sqlx::query_as::<_, FieldOfStudy>(
            "INSERT INTO fields_of_study (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(field)
    }
}
