//! Attendance entity <-> model mapper

use chrono::NaiveDateTime;
use eventhub_core::entities::{Attendance, NewAttendance};
use eventhub_core::value_objects::RecordId;

use crate::models::AttendanceModel;

/// Convert AttendanceModel to Attendance entity
impl From<AttendanceModel> for Attendance {
    fn from(model: AttendanceModel) -> Self {
        Attendance {
            id: RecordId::new(model.assistance_id),
            event_id: RecordId::new(model.event_id),
            user_id: RecordId::new(model.user_id),
            date: model.date,
        }
    }
}

/// Column values for inserting or rewriting an attendance row
#[derive(Debug, Clone, Copy)]
pub struct AttendanceInsert {
    pub event_id: i64,
    pub user_id: i64,
    pub date: NaiveDateTime,
}

impl From<&NewAttendance> for AttendanceInsert {
    fn from(attendance: &NewAttendance) -> Self {
        Self {
            event_id: attendance.event_id.into_inner(),
            user_id: attendance.user_id.into_inner(),
            date: attendance.date.midnight(),
        }
    }
}
