//! PostgreSQL implementation of AttendanceRepository
//!
//! Every mutation runs in a transaction that also adjusts `events.assistance`,
//! so the counter always equals the number of rows referencing the event.
//! Counter updates are single `UPDATE .. SET assistance = assistance +/- 1`
//! statements; the row lock they take serializes concurrent registrations.
//! A move between two events locks both event rows in ascending id order.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, instrument};

use eventhub_core::entities::{Attendance, NewAttendance};
use eventhub_core::error::DomainError;
use eventhub_core::traits::{AttendanceRepository, RepoResult};
use eventhub_core::value_objects::RecordId;

use crate::mappers::AttendanceInsert;
use crate::models::AttendanceModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of AttendanceRepository
#[derive(Clone)]
pub struct PgAttendanceRepository {
    pool: PgPool,
}

impl PgAttendanceRepository {
    /// Create a new PgAttendanceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Add one to an event's counter; `false` when the event does not exist
async fn increment_counter(
    tx: &mut Transaction<'_, Postgres>,
    event_id: i64,
) -> Result<bool, sqlx::Error> {
    let row = sqlx::query_scalar::<_, i64>(
        r#"
        UPDATE events
        SET assistance = assistance + 1
        WHERE event_id = $1
        RETURNING event_id
        "#,
    )
    .bind(event_id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(row.is_some())
}

/// Lock event rows in ascending id order, returning the ids that exist
async fn lock_events(
    tx: &mut Transaction<'_, Postgres>,
    event_ids: &[i64],
) -> Result<Vec<i64>, sqlx::Error> {
    let mut ids = event_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();

    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT event_id
        FROM events
        WHERE event_id = ANY($1)
        ORDER BY event_id
        FOR UPDATE
        "#,
    )
    .bind(ids)
    .fetch_all(&mut **tx)
    .await
}

/// Remove one from an event's counter, never going below zero
async fn decrement_counter(
    tx: &mut Transaction<'_, Postgres>,
    event_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE events
        SET assistance = GREATEST(assistance - 1, 0)
        WHERE event_id = $1
        "#,
    )
    .bind(event_id)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

#[async_trait]
impl AttendanceRepository for PgAttendanceRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Attendance>> {
        let result = sqlx::query_as::<_, AttendanceModel>(
            r#"
            SELECT assistance_id, event_id, user_id, date
            FROM assistance
            WHERE assistance_id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Attendance::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Attendance>> {
        let results = sqlx::query_as::<_, AttendanceModel>(
            r#"
            SELECT assistance_id, event_id, user_id, date
            FROM assistance
            ORDER BY assistance_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Attendance::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_event(&self, event_id: RecordId) -> RepoResult<Vec<Attendance>> {
        let results = sqlx::query_as::<_, AttendanceModel>(
            r#"
            SELECT assistance_id, event_id, user_id, date
            FROM assistance
            WHERE event_id = $1
            ORDER BY assistance_id
            "#,
        )
        .bind(event_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Attendance::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: RecordId) -> RepoResult<Vec<Attendance>> {
        let results = sqlx::query_as::<_, AttendanceModel>(
            r#"
            SELECT assistance_id, event_id, user_id, date
            FROM assistance
            WHERE user_id = $1
            ORDER BY assistance_id
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Attendance::from).collect())
    }

    #[instrument(skip(self, attendance), fields(event_id = %attendance.event_id, user_id = %attendance.user_id))]
    async fn register(&self, attendance: &NewAttendance) -> RepoResult<Attendance> {
        let insert = AttendanceInsert::from(attendance);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if !increment_counter(&mut tx, insert.event_id)
            .await
            .map_err(map_db_error)?
        {
            // Dropping the transaction rolls it back
            return Err(DomainError::EventNotFound(attendance.event_id));
        }

        let model = sqlx::query_as::<_, AttendanceModel>(
            r#"
            INSERT INTO assistance (event_id, user_id, date)
            VALUES ($1, $2, $3)
            RETURNING assistance_id, event_id, user_id, date
            "#,
        )
        .bind(insert.event_id)
        .bind(insert.user_id)
        .bind(insert.date)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Attendance::from(model))
    }

    #[instrument(skip(self, attendance), fields(event_id = %attendance.event_id))]
    async fn update(&self, id: RecordId, attendance: &NewAttendance) -> RepoResult<Attendance> {
        let insert = AttendanceInsert::from(attendance);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let previous_event_id = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT event_id
            FROM assistance
            WHERE assistance_id = $1
            FOR UPDATE
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::AttendanceNotFound(id))?;

        if previous_event_id != insert.event_id {
            let locked = lock_events(&mut tx, &[previous_event_id, insert.event_id])
                .await
                .map_err(map_db_error)?;
            if !locked.contains(&insert.event_id) {
                return Err(DomainError::AssociatedEventNotFound(attendance.event_id));
            }

            increment_counter(&mut tx, insert.event_id)
                .await
                .map_err(map_db_error)?;
            decrement_counter(&mut tx, previous_event_id)
                .await
                .map_err(map_db_error)?;
            debug!(from = previous_event_id, to = insert.event_id, "Attendance moved between events");
        }

        let model = sqlx::query_as::<_, AttendanceModel>(
            r#"
            UPDATE assistance
            SET event_id = $2, user_id = $3, date = $4
            WHERE assistance_id = $1
            RETURNING assistance_id, event_id, user_id, date
            "#,
        )
        .bind(id.into_inner())
        .bind(insert.event_id)
        .bind(insert.user_id)
        .bind(insert.date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || DomainError::AssociatedEventNotFound(attendance.event_id))
        })?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Attendance::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let event_id = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT event_id
            FROM assistance
            WHERE assistance_id = $1
            FOR UPDATE
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::AttendanceNotFound(id))?;

        sqlx::query(
            r#"
            DELETE FROM assistance
            WHERE assistance_id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        decrement_counter(&mut tx, event_id)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
