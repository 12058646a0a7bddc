//! Attendance entity - one user's attendance at one event

use chrono::NaiveDateTime;

use crate::value_objects::{CalendarDate, RecordId};

/// Attendance record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendance {
    pub id: RecordId,
    pub event_id: RecordId,
    pub user_id: RecordId,
    /// Always midnight
    pub date: NaiveDateTime,
}

/// Data for registering or rewriting an attendance record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewAttendance {
    pub event_id: RecordId,
    pub user_id: RecordId,
    pub date: CalendarDate,
}

impl NewAttendance {
    pub fn new(event_id: RecordId, user_id: RecordId, date: CalendarDate) -> Self {
        Self {
            event_id,
            user_id,
            date,
        }
    }
}
