//! Attendance handlers
//!
//! The attendance ledger and the per-weekday tally.

use axum::extract::{Path, State};
use eventhub_service::{
    AttendanceResponse, AttendanceService, DailyAssistanceTally, RegisterAttendanceRequest,
    RegistrationResponse, TallyService, UpdateAttendanceRequest,
};

use crate::extractors::{AttendanceIdPath, AuthUser, EventIdPath, UserIdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// GET /attendance
pub async fn list_attendance(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<ApiJson<Vec<AttendanceResponse>>> {
    let service = AttendanceService::new(state.service_context());
    Ok(ApiJson(service.list_attendance().await?))
}

/// Register attendance and bump the event counter
///
/// POST /attendance
pub async fn register_attendance(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<RegisterAttendanceRequest>,
) -> ApiResult<Created<ApiJson<RegistrationResponse>>> {
    let service = AttendanceService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(ApiJson(response)))
}

/// Total attendance per weekday of the event date
///
/// GET /attendance/daily
pub async fn daily_tally(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<ApiJson<DailyAssistanceTally>> {
    let service = TallyService::new(state.service_context());
    Ok(ApiJson(service.daily_tally().await?))
}

/// GET /attendance/{attendance_id}
pub async fn get_attendance(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<AttendanceIdPath>,
) -> ApiResult<ApiJson<AttendanceResponse>> {
    let service = AttendanceService::new(state.service_context());
    Ok(ApiJson(service.get_attendance(path.attendance_id()?).await?))
}

/// PUT /attendance/{attendance_id}
pub async fn update_attendance(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<AttendanceIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateAttendanceRequest>,
) -> ApiResult<ApiJson<AttendanceResponse>> {
    let service = AttendanceService::new(state.service_context());
    let attendance = service
        .update_attendance(path.attendance_id()?, request)
        .await?;
    Ok(ApiJson(attendance))
}

/// DELETE /attendance/{attendance_id}
pub async fn delete_attendance(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<AttendanceIdPath>,
) -> ApiResult<ApiJson<String>> {
    let attendance_id = path.attendance_id()?;
    let service = AttendanceService::new(state.service_context());
    service.delete_attendance(attendance_id).await?;
    Ok(ApiJson(format!("Attendance {attendance_id} deleted")))
}

/// GET /attendance/event/{event_id}
pub async fn attendance_by_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<EventIdPath>,
) -> ApiResult<ApiJson<Vec<AttendanceResponse>>> {
    let service = AttendanceService::new(state.service_context());
    Ok(ApiJson(service.attendance_by_event(path.event_id()?).await?))
}

/// GET /attendance/user/{user_id}
pub async fn attendance_by_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<ApiJson<Vec<AttendanceResponse>>> {
    let service = AttendanceService::new(state.service_context());
    Ok(ApiJson(service.attendance_by_user(path.user_id()?).await?))
}
