//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDateTime, Utc};
use eventhub_core::{Coordinates, Place, RecordId};
use serde::Serialize;

use super::requests::RegisterAttendanceRequest;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { status: "OK", data }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: UserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: RecordId,
    pub email: String,
    pub name: String,
    pub registration_date: DateTime<Utc>,
}

// ============================================================================
// Event Responses
// ============================================================================

/// Event response
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: RecordId,
    pub user_id: RecordId,
    pub name: String,
    pub description: String,
    pub created_date: DateTime<Utc>,
    /// Stored `"longitude,latitude"` form
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub assistance: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDateTime>,
}

/// Places found around an origin
#[derive(Debug, Clone, Serialize)]
pub struct NearbyPlacesResponse {
    pub origin: Coordinates,
    pub range: u32,
    pub places: Vec<Place>,
}

// ============================================================================
// Attendance Responses
// ============================================================================

/// Attendance response
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceResponse {
    pub id: RecordId,
    pub event_id: RecordId,
    pub user_id: RecordId,
    pub date: NaiveDateTime,
}

/// Confirmation returned after registering attendance
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    pub message: String,
    pub attendance: AttendanceResponse,
    pub request: RegisterAttendanceRequest,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Individual dependency checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
