//! Event database model

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::FromRow;

/// Database model for events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub event_id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: String,
    pub created_date: DateTime<Utc>,
    pub location: String,
    pub assistance: i32,
    pub event_date: Option<NaiveDateTime>,
}
