//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Attendance, Event, NewAttendance, NewEvent, NewUser, User};
use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Event>>;

    /// List all events ordered by ID
    async fn find_all(&self) -> RepoResult<Vec<Event>>;

    /// Check if an event exists
    async fn exists(&self, id: RecordId) -> RepoResult<bool>;

    /// Insert a new event with a zero counter
    async fn create(&self, event: &NewEvent) -> RepoResult<Event>;

    /// Overwrite every column of an existing event
    ///
    /// Fails with `EventNotFound` when no row was affected.
    async fn update(&self, event: &Event) -> RepoResult<Event>;

    /// Delete an event (attendance rows cascade)
    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Attendance Repository
// ============================================================================

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Find attendance by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Attendance>>;

    /// List all attendance records
    async fn find_all(&self) -> RepoResult<Vec<Attendance>>;

    /// List attendance records for an event
    async fn find_by_event(&self, event_id: RecordId) -> RepoResult<Vec<Attendance>>;

    /// List attendance records for a user
    async fn find_by_user(&self, user_id: RecordId) -> RepoResult<Vec<Attendance>>;

    /// Increment the event counter and insert the record in one transaction
    ///
    /// Fails with `EventNotFound` without mutating anything when the event is absent.
    async fn register(&self, attendance: &NewAttendance) -> RepoResult<Attendance>;

    /// Rewrite a record, moving the counter when the event changes
    ///
    /// Fails with `AttendanceNotFound` or `AssociatedEventNotFound`.
    async fn update(&self, id: RecordId, attendance: &NewAttendance) -> RepoResult<Attendance>;

    /// Delete a record and decrement its event counter
    ///
    /// Fails with `AttendanceNotFound` when the record is absent.
    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// List all users
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Update email and name of an existing user
    async fn update(&self, user: &User) -> RepoResult<User>;

    /// Delete a user
    async fn delete(&self, id: RecordId) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: RecordId) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: RecordId, password_hash: &str) -> RepoResult<()>;
}
