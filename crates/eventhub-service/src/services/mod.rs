//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod attendance;
pub mod auth;
pub mod context;
pub mod error;
pub mod event;
pub mod tally;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use tally::{compute_daily_tally, DailyAssistanceTally, TallyService};
pub use user::UserService;
