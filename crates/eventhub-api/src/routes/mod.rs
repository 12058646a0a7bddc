//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{attendance, auth, events, health, users};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(event_routes())
        .merge(attendance_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route(
            "/users/:user_id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}

/// Event routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events).post(events::create_event))
        .route("/events/nearby-places", post(events::nearby_places))
        .route(
            "/events/:event_id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route(
            "/events/:event_id/nearby-places",
            post(events::event_nearby_places),
        )
}

/// Attendance routes
fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/attendance",
            get(attendance::list_attendance).post(attendance::register_attendance),
        )
        .route("/attendance/daily", get(attendance::daily_tally))
        .route(
            "/attendance/:attendance_id",
            get(attendance::get_attendance)
                .put(attendance::update_attendance)
                .delete(attendance::delete_attendance),
        )
        .route(
            "/attendance/event/:event_id",
            get(attendance::attendance_by_event),
        )
        .route("/attendance/user/:user_id", get(attendance::attendance_by_user))
}
