use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

/// One immutable snapshot of a mutable entity, appended per write.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Revision {
    pub id: i64,
    pub entity_type: String,
    pub entity_id: i64,
    pub action: String,
    pub snapshot: JsonValue,
    pub changed_by: Option<i64>,
    pub changed_at: DateTime<Utc>,
}
