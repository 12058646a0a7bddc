//! Database models - SQLx-compatible structs for PostgreSQL tables

mod attendance;
mod event;
mod user;

pub use attendance::AttendanceModel;
pub use event::EventModel;
pub use user::UserModel;
