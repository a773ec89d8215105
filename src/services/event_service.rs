use crate::dto::event_dto::{CreateEventPayload, UpdateEventPayload};
use crate::error::{Error, Result};
use crate::models::event::Event;
use sqlx::PgPool;

const EVENT_COLUMNS: &str = "id, title, description, event_date, location, cover_image_url";

#[derive(Clone)]
pub struct EventService {
    pool: PgPool,
}

impl EventService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        let sql = format!("SELECT {} FROM events ORDER BY event_date", EVENT_COLUMNS);
        let events = sqlx::query_as::<_, Event>(&sql).fetch_all(&self.pool).await?;
        Ok(events)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Event> {
        let sql = format!("SELECT {} FROM events WHERE id = $1", EVENT_COLUMNS);
        let event = sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        event.ok_or_else(|| Error::NotFound("Event not found".to_string()))
    }

    pub async fn create(&self, payload: CreateEventPayload) -> Result<Event> {
        payload.validate_payload()?;

        let sql = format!(
            "INSERT INTO events (title, description, event_date, location, cover_image_url) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            EVENT_COLUMNS
        );
        let event = sqlx::query_as::<_, Event>(&sql)
            .bind(payload.title.trim())
            .bind(payload.description.trim())
            .bind(payload.event_date)
            .bind(payload.location.trim())
            .bind(payload.cover_image_url.trim())
            .fetch_one(&self.pool)
            .await?;
        Ok(event)
    }

    pub async fn update(&self, id: i64, payload: UpdateEventPayload) -> Result<Event> {
        self.get_by_id(id).await?;
        payload.validate_payload()?;

        let sql = format!(
            "UPDATE events SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                event_date = COALESCE($4, event_date), \
                location = COALESCE($5, location), \
                cover_image_url = COALESCE($6, cover_image_url) \
             WHERE id = $1 RETURNING {}",
            EVENT_COLUMNS
        );
        let event = sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .bind(payload.title.as_deref().map(str::trim))
            .bind(payload.description.as_deref().map(str::trim))
            .bind(payload.event_date)
            .bind(payload.location.as_deref().map(str::trim))
            .bind(payload.cover_image_url.as_deref().map(str::trim))
            .fetch_one(&self.pool)
            .await?;
        Ok(event)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Event not found".to_string()));
        }
        Ok(())
    }
}
