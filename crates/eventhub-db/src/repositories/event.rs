//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use eventhub_core::entities::{Event, NewEvent};
use eventhub_core::error::DomainError;
use eventhub_core::traits::{EventRepository, RepoResult};
use eventhub_core::value_objects::RecordId;

use crate::mappers::{EventInsert, EventUpdate};
use crate::models::EventModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(
            r#"
            SELECT event_id, user_id, name, description, created_date, location,
                   assistance, event_date
            FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(
            r#"
            SELECT event_id, user_id, name, description, created_date, location,
                   assistance, event_date
            FROM events
            ORDER BY event_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: RecordId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM events WHERE event_id = $1)
            "#,
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, event), fields(user_id = %event.user_id))]
    async fn create(&self, event: &NewEvent) -> RepoResult<Event> {
        let insert = EventInsert::new(event);

        let model = sqlx::query_as::<_, EventModel>(
            r#"
            INSERT INTO events (user_id, name, description, created_date, location,
                                assistance, event_date)
            VALUES ($1, $2, $3, NOW(), $4, 0, $5)
            RETURNING event_id, user_id, name, description, created_date, location,
                      assistance, event_date
            "#,
        )
        .bind(insert.user_id)
        .bind(insert.name)
        .bind(insert.description)
        .bind(&insert.location)
        .bind(insert.event_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::UserNotFound(event.user_id)))?;

        Ok(Event::from(model))
    }

    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn update(&self, event: &Event) -> RepoResult<Event> {
        let update = EventUpdate::new(event);

        // The counter belongs to the attendance ledger and is left untouched
        let model = sqlx::query_as::<_, EventModel>(
            r#"
            UPDATE events
            SET user_id = $2, name = $3, description = $4, created_date = $5,
                location = $6, event_date = $7
            WHERE event_id = $1
            RETURNING event_id, user_id, name, description, created_date, location,
                      assistance, event_date
            "#,
        )
        .bind(update.event_id)
        .bind(update.user_id)
        .bind(update.name)
        .bind(update.description)
        .bind(update.created_date)
        .bind(update.location)
        .bind(update.event_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::UserNotFound(event.user_id)))?;

        model
            .map(Event::from)
            .ok_or(DomainError::EventNotFound(event.id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EventNotFound(id));
        }

        Ok(())
    }
}
