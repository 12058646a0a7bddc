//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::RecordId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Event not found: {0}")]
    EventNotFound(RecordId),

    #[error("Attendance not found: {0}")]
    AttendanceNotFound(RecordId),

    #[error("User not found: {0}")]
    UserNotFound(RecordId),

    #[error("Associated event does not exist: {0}")]
    AssociatedEventNotFound(RecordId),

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Store operation timed out")]
    StoreTimeout,

    #[error("Geocoding error: {0}")]
    GeocodingError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::AttendanceNotFound(_) => "UNKNOWN_ATTENDANCE",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::AssociatedEventNotFound(_) => "UNKNOWN_ASSOCIATED_EVENT",
            Self::LocationNotFound(_) => "UNKNOWN_LOCATION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::InvalidCoordinates(_) => "INVALID_COORDINATES",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StoreTimeout => "STORE_TIMEOUT",
            Self::GeocodingError(_) => "GEOCODING_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::EventNotFound(_)
                | Self::AttendanceNotFound(_)
                | Self::UserNotFound(_)
                | Self::AssociatedEventNotFound(_)
                | Self::LocationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidDate(_) | Self::InvalidCoordinates(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }

    /// Check if this is an infrastructure failure
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::DatabaseError(_)
                | Self::StoreTimeout
                | Self::GeocodingError(_)
                | Self::InternalError(_)
        )
    }
}
