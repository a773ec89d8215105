use crate::error::Result;
use crate::models::revision::Revision;
use serde_json::Value as JsonValue;
use sqlx::{PgPool, Postgres, Transaction};

/// Append-only history shadow for mutable entities. Each write produces an
/// immutable snapshot tagged with who and when; snapshots ride in the same
/// transaction as the primary-row write.
#[derive(Clone)]
pub struct HistoryService {
    pool: PgPool,
}

impl HistoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn record(
        tx: &mut Transaction<'_, Postgres>,
        entity_type: &str,
        entity_id: i64,
        action: &str,
        snapshot: JsonValue,
        changed_by: Option<i64>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO revisions (entity_type, entity_id, action, snapshot, changed_by)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entity_type)
        .bind(entity_id)
        .bind(action)
        .bind(snapshot)
        .bind(changed_by)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    pub async fn list(&self, entity_type: &str, entity_id: i64) -> Result<Vec<Revision>> {
        let rows = sqlx::query_as::<_, Revision>(
            r#"
            SELECT id, entity_type, entity_id, action, snapshot, changed_by, changed_at
            FROM revisions
            WHERE entity_type = $1 AND entity_id = $2
            ORDER BY changed_at DESC, id DESC
            "#,
        )
        .bind(entity_type)
        .bind(entity_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
