//! Test fixtures and data generators
//!
//! Request bodies and response shapes for the REST API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique suffix across test processes sharing one database
pub fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{nanos}{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            name: format!("Test User {suffix}"),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub registration_date: String,
}

/// Create event request
#[derive(Debug, Serialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: String,
    pub location: String,
    pub date: String,
}

impl CreateEventRequest {
    /// Event on the given ISO date at a resolvable address
    pub fn on(date: &str) -> Self {
        Self {
            name: format!("Test Event {}", unique_suffix()),
            description: "An integration test event".to_string(),
            location: "Carrera 7, Bogota".to_string(),
            date: date.to_string(),
        }
    }
}

/// Partial event update
#[derive(Debug, Default, Serialize)]
pub struct UpdateEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Coordinates as returned by the API
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CoordinatesResponse {
    pub longitude: f64,
    pub latitude: f64,
}

/// Event response
#[derive(Debug, Deserialize)]
pub struct EventResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub coordinates: Option<CoordinatesResponse>,
    pub assistance: i32,
    pub event_date: Option<String>,
}

/// Place found near an origin
#[derive(Debug, Deserialize)]
pub struct PlaceResponse {
    pub id: String,
    pub name: String,
    pub place_name: String,
    pub category: Option<String>,
}

/// Nearby places response
#[derive(Debug, Deserialize)]
pub struct NearbyPlacesResponse {
    pub origin: CoordinatesResponse,
    pub range: u32,
    pub places: Vec<PlaceResponse>,
}

/// Attendance registration or replacement body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRequest {
    pub event_id: i64,
    pub user_id: i64,
    pub date: String,
}

impl AttendanceRequest {
    pub fn new(event_id: i64, user_id: i64, date: &str) -> Self {
        Self {
            event_id,
            user_id,
            date: date.to_string(),
        }
    }
}

/// Attendance response
#[derive(Debug, Deserialize)]
pub struct AttendanceResponse {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub date: String,
}

/// Registration confirmation
#[derive(Debug, Deserialize)]
pub struct RegistrationResponse {
    pub message: String,
    pub attendance: AttendanceResponse,
    pub request: serde_json::Value,
}

/// Weekday label to total
pub type DailyTally = BTreeMap<String, i64>;

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
