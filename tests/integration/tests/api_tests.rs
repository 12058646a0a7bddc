//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Geocoding is served by an in-process fixed geocoder.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use futures::future::join_all;
use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
    FIXED_POINT, UNKNOWN_ADDRESS,
};
use reqwest::StatusCode;

/// Register a fresh user and return the auth payload
async fn register_user(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique();
    let response = server.post("/auth/register", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_event(server: &TestServer, token: &str, date: &str) -> EventResponse {
    let response = server
        .post_auth("/events", token, &CreateEventRequest::on(date))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn fetch_event(server: &TestServer, token: &str, id: i64) -> EventResponse {
    let response = server.get_auth(&format!("/events/{id}"), token).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_root("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_root("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.name, request.name);
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/auth/register", &request).await.unwrap();

    let response = server.post("/auth/register", &request).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/auth/register", &register_req).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/auth/refresh", &refresh_req).await.unwrap();
    let tokens: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(tokens.user.id, auth.user.id);
    assert!(!tokens.access_token.is_empty());
}

#[tokio::test]
async fn test_access_token_cannot_refresh() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.access_token,
    };
    let response = server.post("/auth/refresh", &refresh_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_and_delete_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let token = &auth.access_token;
    let path = format!("/users/{}", auth.user.id);

    let response = server.get_auth(&path, token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.email, auth.user.email);

    let response = server.delete_auth(&path, token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth(&path, token).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_USER");
}

#[tokio::test]
async fn test_users_require_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/users").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_create_event_geocodes_and_starts_empty() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let event = create_event(&server, &auth.access_token, "2024-07-01").await;

    assert_eq!(event.user_id, auth.user.id);
    assert_eq!(event.assistance, 0);
    assert_eq!(event.location, format!("{},{}", FIXED_POINT.0, FIXED_POINT.1));
    let coordinates = event.coordinates.expect("coordinates");
    assert!((coordinates.longitude - FIXED_POINT.0).abs() < 1e-9);
    assert!((coordinates.latitude - FIXED_POINT.1).abs() < 1e-9);
    assert!(event
        .event_date
        .as_deref()
        .is_some_and(|d| d.starts_with("2024-07-01")));
}

#[tokio::test]
async fn test_create_event_unknown_location() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let mut request = CreateEventRequest::on("2024-07-01");
    request.location = UNKNOWN_ADDRESS.to_string();

    let response = server
        .post_auth("/events", &auth.access_token, &request)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_LOCATION");
}

#[tokio::test]
async fn test_update_event_keeps_counter() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let token = &auth.access_token;
    let event = create_event(&server, token, "2024-07-01").await;

    let body = AttendanceRequest::new(event.id, auth.user.id, "2024-07-01");
    let response = server.post_auth("/attendance", token, &body).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let update = UpdateEventRequest {
        name: Some("Renamed event".to_string()),
        ..Default::default()
    };
    let response = server
        .put_auth(&format!("/events/{}", event.id), token, &update)
        .await
        .unwrap();
    let updated: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.name, "Renamed event");
    assert_eq!(updated.description, event.description);
    assert_eq!(updated.assistance, 1);
}

#[tokio::test]
async fn test_delete_event() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let token = &auth.access_token;
    let event = create_event(&server, token, "2024-07-02").await;
    let path = format!("/events/{}", event.id);

    let response = server.delete_auth(&path, token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth(&path, token).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_EVENT");
}

#[tokio::test]
async fn test_event_nearby_places() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let token = &auth.access_token;
    let event = create_event(&server, token, "2024-07-03").await;

    let response = server
        .post_auth(
            &format!("/events/{}/nearby-places", event.id),
            token,
            &serde_json::json!({ "range": 500 }),
        )
        .await
        .unwrap();
    let nearby: NearbyPlacesResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(nearby.range, 500);
    assert!((nearby.origin.longitude - FIXED_POINT.0).abs() < 1e-9);
    assert_eq!(nearby.places.len(), 1);
    assert_eq!(nearby.places[0].category.as_deref(), Some("cafe"));
}

#[tokio::test]
async fn test_nearby_places_rejects_small_range() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let response = server
        .post_auth(
            "/events/nearby-places",
            &auth.access_token,
            &serde_json::json!({ "lon": -74.07, "lat": 4.71, "range": 10 }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Attendance Tests
// ============================================================================

#[tokio::test]
async fn test_register_attendance_increments_once() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let token = &auth.access_token;
    let event = create_event(&server, token, "2024-07-01").await;

    let body = AttendanceRequest::new(event.id, auth.user.id, "2024-07-01");
    let response = server.post_auth("/attendance", token, &body).await.unwrap();
    let registration: RegistrationResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(registration.attendance.event_id, event.id);
    assert_eq!(registration.attendance.user_id, auth.user.id);
    assert_eq!(registration.request["eventId"], event.id);
    assert_eq!(fetch_event(&server, token, event.id).await.assistance, 1);

    let response = server
        .get_auth(&format!("/attendance/event/{}", event.id), token)
        .await
        .unwrap();
    let records: Vec<AttendanceResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_register_attendance_missing_event() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let body = AttendanceRequest::new(i64::MAX, auth.user.id, "2024-07-01");
    let response = server
        .post_auth("/attendance", &auth.access_token, &body)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_EVENT");

    let response = server
        .get_auth(&format!("/attendance/event/{}", i64::MAX), &auth.access_token)
        .await
        .unwrap();
    let records: Vec<AttendanceResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_concurrent_registrations_over_http() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let token = &auth.access_token;
    let event = create_event(&server, token, "2024-07-04").await;

    let body = AttendanceRequest::new(event.id, auth.user.id, "2024-07-04");
    let responses = join_all((0..10).map(|_| server.post_auth("/attendance", token, &body))).await;
    for response in responses {
        assert_status(response.unwrap(), StatusCode::CREATED)
            .await
            .unwrap();
    }

    assert_eq!(fetch_event(&server, token, event.id).await.assistance, 10);
}

#[tokio::test]
async fn test_attendance_date_is_clamped() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let token = &auth.access_token;
    let event = create_event(&server, token, "2024-02-10").await;

    let body = AttendanceRequest::new(event.id, auth.user.id, "2024-02-31");
    let response = server.post_auth("/attendance", token, &body).await.unwrap();
    let registration: RegistrationResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(registration.attendance.date.starts_with("2024-02-29"));

    let body = AttendanceRequest::new(event.id, auth.user.id, "2023-02-31");
    let response = server
        .put_auth(
            &format!("/attendance/{}", registration.attendance.id),
            token,
            &body,
        )
        .await
        .unwrap();
    let updated: AttendanceResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(updated.date.starts_with("2023-02-28"));
}

#[tokio::test]
async fn test_update_attendance_moves_counter() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let token = &auth.access_token;
    let first = create_event(&server, token, "2024-07-05").await;
    let second = create_event(&server, token, "2024-07-06").await;

    let body = AttendanceRequest::new(first.id, auth.user.id, "2024-07-05");
    let response = server.post_auth("/attendance", token, &body).await.unwrap();
    let registration: RegistrationResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/attendance/{}", registration.attendance.id);

    let moved = AttendanceRequest::new(second.id, auth.user.id, "2024-07-06");
    let response = server.put_auth(&path, token, &moved).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetch_event(&server, token, first.id).await.assistance, 0);
    assert_eq!(fetch_event(&server, token, second.id).await.assistance, 1);

    let orphan = AttendanceRequest::new(i64::MAX, auth.user.id, "2024-07-06");
    let response = server.put_auth(&path, token, &orphan).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_ASSOCIATED_EVENT");
}

#[tokio::test]
async fn test_delete_attendance_decrements() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let token = &auth.access_token;
    let event = create_event(&server, token, "2024-07-01").await;

    let body = AttendanceRequest::new(event.id, auth.user.id, "2024-07-01");
    let response = server.post_auth("/attendance", token, &body).await.unwrap();
    let registration: RegistrationResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/attendance/{}", registration.attendance.id);

    let response = server.delete_auth(&path, token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetch_event(&server, token, event.id).await.assistance, 0);

    let response = server.delete_auth(&path, token).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_ATTENDANCE");
    assert_eq!(fetch_event(&server, token, event.id).await.assistance, 0);
}

#[tokio::test]
async fn test_daily_tally_counts_by_weekday() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let token = &auth.access_token;

    let response = server.get_auth("/attendance/daily", token).await.unwrap();
    let before: DailyTally = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(before.len(), 7);

    // 2024-07-01 is a Monday, 2024-07-07 a Sunday
    let monday = create_event(&server, token, "2024-07-01").await;
    let sunday = create_event(&server, token, "2024-07-07").await;
    for (event, times) in [(&monday, 3), (&sunday, 2)] {
        for _ in 0..times {
            let body = AttendanceRequest::new(event.id, auth.user.id, "2024-07-01");
            let response = server.post_auth("/attendance", token, &body).await.unwrap();
            assert_status(response, StatusCode::CREATED).await.unwrap();
        }
    }

    let response = server.get_auth("/attendance/daily", token).await.unwrap();
    let after: DailyTally = assert_json(response, StatusCode::OK).await.unwrap();

    // Other tests share the database, so only lower bounds hold
    assert!(after["Monday"] >= before["Monday"] + 3);
    assert!(after["Sunday"] >= before["Sunday"] + 2);
}
