//! User handlers

use axum::extract::{Path, State};
use eventhub_service::{UpdateUserRequest, UserResponse, UserService};

use crate::extractors::{AuthUser, UserIdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<ApiJson<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    Ok(ApiJson(service.list_users().await?))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(ApiJson(service.get_user(path.user_id()?).await?))
}

/// PUT /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<UserIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(ApiJson(service.update_user(path.user_id()?, request).await?))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<ApiJson<String>> {
    let user_id = path.user_id()?;
    let service = UserService::new(state.service_context());
    service.delete_user(user_id).await?;
    Ok(ApiJson(format!("User {user_id} deleted")))
}
