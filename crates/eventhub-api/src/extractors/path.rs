//! Path parameter extractors
//!
//! Ids arrive as strings and must parse to a positive integer.

use eventhub_core::RecordId;
use serde::Deserialize;

use crate::response::ApiError;

fn parse_id(raw: &str, name: &str) -> Result<RecordId, ApiError> {
    RecordId::parse(raw).map_err(|e| ApiError::invalid_path(format!("Invalid {name}: {e}")))
}

/// Path parameters with event_id
#[derive(Debug, Deserialize)]
pub struct EventIdPath {
    pub event_id: String,
}

impl EventIdPath {
    /// Parse event_id as RecordId
    pub fn event_id(&self) -> Result<RecordId, ApiError> {
        parse_id(&self.event_id, "event_id")
    }
}

/// Path parameters with attendance_id
#[derive(Debug, Deserialize)]
pub struct AttendanceIdPath {
    pub attendance_id: String,
}

impl AttendanceIdPath {
    /// Parse attendance_id as RecordId
    pub fn attendance_id(&self) -> Result<RecordId, ApiError> {
        parse_id(&self.attendance_id, "attendance_id")
    }
}

/// Path parameters with user_id
#[derive(Debug, Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as RecordId
    pub fn user_id(&self) -> Result<RecordId, ApiError> {
        parse_id(&self.user_id, "user_id")
    }
}
