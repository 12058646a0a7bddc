//! Service context - dependency container for services
//!
//! Holds the repositories, the geocoder, and the other dependencies needed by services.

use std::sync::Arc;

use eventhub_common::auth::JwtService;
use eventhub_core::traits::{AttendanceRepository, EventRepository, Geocoder, UserRepository};
use eventhub_core::WeekdayLabels;
use eventhub_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The geocoding provider
/// - JWT service for authentication
/// - The weekday label set used by the daily tally
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    event_repo: Arc<dyn EventRepository>,
    attendance_repo: Arc<dyn AttendanceRepository>,
    user_repo: Arc<dyn UserRepository>,

    // External providers
    geocoder: Arc<dyn Geocoder>,

    // Services
    jwt_service: Arc<JwtService>,

    tally_labels: WeekdayLabels,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        event_repo: Arc<dyn EventRepository>,
        attendance_repo: Arc<dyn AttendanceRepository>,
        user_repo: Arc<dyn UserRepository>,
        geocoder: Arc<dyn Geocoder>,
        jwt_service: Arc<JwtService>,
        tally_labels: WeekdayLabels,
    ) -> Self {
        Self {
            pool,
            event_repo,
            attendance_repo,
            user_repo,
            geocoder,
            jwt_service,
            tally_labels,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the attendance repository
    pub fn attendance_repo(&self) -> &dyn AttendanceRepository {
        self.attendance_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Providers ===

    /// Get the geocoder
    pub fn geocoder(&self) -> &dyn Geocoder {
        self.geocoder.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Label set used for weekday buckets
    pub fn tally_labels(&self) -> WeekdayLabels {
        self.tally_labels
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("geocoder", &"dyn Geocoder")
            .field("tally_labels", &self.tally_labels)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    event_repo: Option<Arc<dyn EventRepository>>,
    attendance_repo: Option<Arc<dyn AttendanceRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    geocoder: Option<Arc<dyn Geocoder>>,
    jwt_service: Option<Arc<JwtService>>,
    tally_labels: WeekdayLabels,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn attendance_repo(mut self, repo: Arc<dyn AttendanceRepository>) -> Self {
        self.attendance_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn geocoder(mut self, geocoder: Arc<dyn Geocoder>) -> Self {
        self.geocoder = Some(geocoder);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Defaults to English
    pub fn tally_labels(mut self, labels: WeekdayLabels) -> Self {
        self.tally_labels = labels;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.event_repo
                .ok_or_else(|| ServiceError::validation("event_repo is required"))?,
            self.attendance_repo
                .ok_or_else(|| ServiceError::validation("attendance_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.geocoder
                .ok_or_else(|| ServiceError::validation("geocoder is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.tally_labels,
        ))
    }
}
