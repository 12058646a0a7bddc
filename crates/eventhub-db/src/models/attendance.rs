//! Attendance database model

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database model for the assistance table
#[derive(Debug, Clone, FromRow)]
pub struct AttendanceModel {
    pub assistance_id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub date: NaiveDateTime,
}
