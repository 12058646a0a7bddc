//! # eventhub-core
//!
//! Domain layer containing entities, value objects, repository traits, and the geocoding port.
//! This crate has zero dependencies on infrastructure (database, web framework, HTTP clients).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Attendance, Event, NewAttendance, NewEvent, NewUser, Place, User};
pub use error::DomainError;
pub use traits::{
    AttendanceRepository, EventRepository, Geocoder, RepoResult, UserRepository,
};
pub use value_objects::{
    CalendarDate, Coordinates, RecordId, RecordIdParseError, UnknownLabelSet, WeekdayLabels,
    DAYS_IN_WEEK,
};
