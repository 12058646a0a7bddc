//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use eventhub_core::entities::{Attendance, Event, User};

use super::responses::{AttendanceResponse, EventResponse, UserResponse};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            registration_date: user.registration_date,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            user_id: event.user_id,
            name: event.name.clone(),
            description: event.description.clone(),
            created_date: event.created_date,
            location: event.location.clone(),
            // Legacy rows may hold an address that never resolved
            coordinates: event.coordinates().ok(),
            assistance: event.assistance,
            event_date: event.event_date,
        }
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self::from(&event)
    }
}

impl From<&Attendance> for AttendanceResponse {
    fn from(attendance: &Attendance) -> Self {
        Self {
            id: attendance.id,
            event_id: attendance.event_id,
            user_id: attendance.user_id,
            date: attendance.date,
        }
    }
}

impl From<Attendance> for AttendanceResponse {
    fn from(attendance: Attendance) -> Self {
        Self::from(&attendance)
    }
}
