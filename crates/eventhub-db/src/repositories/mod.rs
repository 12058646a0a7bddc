//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in eventhub-core.

mod attendance;
mod error;
mod event;
mod user;

pub use attendance::PgAttendanceRepository;
pub use event::PgEventRepository;
pub use user::PgUserRepository;
