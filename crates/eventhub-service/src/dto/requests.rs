//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use std::borrow::Cow;

use eventhub_core::CalendarDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Accept `YYYY-MM-DD`, optionally followed by a time part
fn validate_iso_date(value: &str) -> Result<(), ValidationError> {
    CalendarDate::parse(value).map(|_| ()).map_err(|e| {
        ValidationError::new("iso_date").with_message(Cow::Owned(e.to_string()))
    })
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 4, max = 128, message = "Password must be 4-128 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update user request; omitted fields keep their value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 4, max = 128, message = "Password must be 4-128 characters"))]
    pub password: Option<String>,
}

// ============================================================================
// Event Requests
// ============================================================================

/// Create event request
///
/// `location` is a free-form address resolved through the geocoder.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 3, max = 200, message = "Name must be 3-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 5, message = "Location must be at least 5 characters"))]
    pub location: String,

    #[validate(custom(function = "validate_iso_date"))]
    pub date: String,
}

/// Update event request; omitted fields keep their value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 3, max = 200, message = "Name must be 3-200 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,

    #[validate(length(min = 5, message = "Location must be at least 5 characters"))]
    pub location: Option<String>,

    #[validate(custom(function = "validate_iso_date"))]
    pub date: Option<String>,
}

/// Points of interest around a coordinate
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct NearbyPlacesRequest {
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub lon: f64,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub lat: f64,

    /// Search radius in meters
    #[validate(range(min = 100, message = "Range must be at least 100 meters"))]
    pub range: u32,
}

/// Points of interest around an event's location
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct EventNearbyPlacesRequest {
    #[validate(range(min = 100, message = "Range must be at least 100 meters"))]
    pub range: u32,
}

// ============================================================================
// Attendance Requests
// ============================================================================

/// Attendance registration request
///
/// Echoed back in the registration confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAttendanceRequest {
    #[validate(range(min = 1, message = "eventId must be a positive integer"))]
    pub event_id: i64,

    #[validate(range(min = 1, message = "userId must be a positive integer"))]
    pub user_id: i64,

    #[validate(custom(function = "validate_iso_date"))]
    pub date: String,
}

/// Attendance update request (full replacement)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttendanceRequest {
    #[validate(range(min = 1, message = "eventId must be a positive integer"))]
    pub event_id: i64,

    #[validate(range(min = 1, message = "userId must be a positive integer"))]
    pub user_id: i64,

    #[validate(custom(function = "validate_iso_date"))]
    pub date: String,
}
