//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateEventRequest, EventNearbyPlacesRequest, LoginRequest, NearbyPlacesRequest,
    RefreshTokenRequest, RegisterAttendanceRequest, RegisterRequest, UpdateAttendanceRequest,
    UpdateEventRequest, UpdateUserRequest,
};

pub use responses::{
    ApiResponse, AttendanceResponse, AuthResponse, EventResponse, HealthChecks, HealthResponse,
    NearbyPlacesResponse, ReadinessResponse, RegistrationResponse, UserResponse,
};
