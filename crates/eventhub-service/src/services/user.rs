//! User service
//!
//! Handles user account operations.

use eventhub_common::auth::{hash_password, validate_password_strength};
use eventhub_core::{DomainError, RecordId};
use tracing::{info, instrument};

use crate::dto::{UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All users
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: RecordId) -> ServiceResult<UserResponse> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    /// Update email, name and password; registration date is kept
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: RecordId,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        if let Some(email) = request.email {
            let email = email.trim().to_lowercase();
            if email != user.email {
                if self.ctx.user_repo().email_exists(&email).await? {
                    return Err(ServiceError::conflict("Email already registered"));
                }
                user.email = email;
            }
        }

        if let Some(name) = request.name {
            user.name = name;
        }

        let user = self.ctx.user_repo().update(&user).await?;

        if let Some(password) = request.password {
            validate_password_strength(&password)?;
            let password_hash = hash_password(&password)?;
            self.ctx
                .user_repo()
                .update_password(user_id, &password_hash)
                .await?;
            info!(user_id = %user_id, "Password changed");
        }

        info!(user_id = %user_id, "User updated");
        Ok(UserResponse::from(&user))
    }

    /// Delete a user and, by cascade, the events they own
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: RecordId) -> ServiceResult<()> {
        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}
