//! Attendance ledger service
//!
//! Registration, lookups, updates and deletion of attendance records. Every
//! mutation keeps the event's `assistance` counter in step inside one store
//! transaction.

use eventhub_core::entities::NewAttendance;
use eventhub_core::{CalendarDate, DomainError, RecordId};
use tracing::{info, instrument};

use crate::dto::{
    AttendanceResponse, RegisterAttendanceRequest, RegistrationResponse, UpdateAttendanceRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

fn positive_id(value: i64, field: &str) -> ServiceResult<RecordId> {
    let id = RecordId::new(value);
    if id.is_valid() {
        Ok(id)
    } else {
        Err(ServiceError::validation(format!(
            "{field} must be a positive integer"
        )))
    }
}

/// Attendance service
pub struct AttendanceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AttendanceService<'a> {
    /// Create a new AttendanceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register attendance and bump the event counter
    ///
    /// Fails with `EventNotFound` without touching the store when the event
    /// does not exist.
    #[instrument(skip(self), fields(event_id = request.event_id, user_id = request.user_id))]
    pub async fn register(
        &self,
        request: RegisterAttendanceRequest,
    ) -> ServiceResult<RegistrationResponse> {
        let event_id = positive_id(request.event_id, "eventId")?;
        let user_id = positive_id(request.user_id, "userId")?;
        let date = CalendarDate::parse(&request.date)?;

        let attendance = self
            .ctx
            .attendance_repo()
            .register(&NewAttendance::new(event_id, user_id, date))
            .await?;

        info!(attendance_id = %attendance.id, %date, "Attendance registered");

        Ok(RegistrationResponse {
            message: "Attendance registered".to_string(),
            attendance: AttendanceResponse::from(&attendance),
            request,
        })
    }

    /// Get attendance by ID
    #[instrument(skip(self))]
    pub async fn get_attendance(&self, attendance_id: RecordId) -> ServiceResult<AttendanceResponse> {
        self.ctx
            .attendance_repo()
            .find_by_id(attendance_id)
            .await?
            .map(AttendanceResponse::from)
            .ok_or_else(|| DomainError::AttendanceNotFound(attendance_id).into())
    }

    /// All attendance records
    #[instrument(skip(self))]
    pub async fn list_attendance(&self) -> ServiceResult<Vec<AttendanceResponse>> {
        let records = self.ctx.attendance_repo().find_all().await?;
        Ok(records.iter().map(AttendanceResponse::from).collect())
    }

    /// Attendance records of an event; empty when none match
    #[instrument(skip(self))]
    pub async fn attendance_by_event(
        &self,
        event_id: RecordId,
    ) -> ServiceResult<Vec<AttendanceResponse>> {
        let records = self.ctx.attendance_repo().find_by_event(event_id).await?;
        Ok(records.iter().map(AttendanceResponse::from).collect())
    }

    /// Attendance records of a user; empty when none match
    #[instrument(skip(self))]
    pub async fn attendance_by_user(
        &self,
        user_id: RecordId,
    ) -> ServiceResult<Vec<AttendanceResponse>> {
        let records = self.ctx.attendance_repo().find_by_user(user_id).await?;
        Ok(records.iter().map(AttendanceResponse::from).collect())
    }

    /// Replace a record
    ///
    /// The referenced event must exist. Moving a record to another event
    /// moves one unit of `assistance` with it.
    #[instrument(skip(self))]
    pub async fn update_attendance(
        &self,
        attendance_id: RecordId,
        request: UpdateAttendanceRequest,
    ) -> ServiceResult<AttendanceResponse> {
        let event_id = positive_id(request.event_id, "eventId")?;
        let user_id = positive_id(request.user_id, "userId")?;
        let date = CalendarDate::parse(&request.date)?;

        if !self.ctx.event_repo().exists(event_id).await? {
            return Err(DomainError::AssociatedEventNotFound(event_id).into());
        }

        let attendance = self
            .ctx
            .attendance_repo()
            .update(attendance_id, &NewAttendance::new(event_id, user_id, date))
            .await?;

        info!(attendance_id = %attendance_id, event_id = %event_id, %date, "Attendance updated");
        Ok(AttendanceResponse::from(&attendance))
    }

    /// Delete a record and decrement its event counter
    #[instrument(skip(self))]
    pub async fn delete_attendance(&self, attendance_id: RecordId) -> ServiceResult<()> {
        self.ctx.attendance_repo().delete(attendance_id).await?;
        info!(attendance_id = %attendance_id, "Attendance deleted");
        Ok(())
    }
}
