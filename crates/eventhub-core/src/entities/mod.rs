//! Domain entities - core business objects

mod attendance;
mod event;
mod place;
mod user;

pub use attendance::{Attendance, NewAttendance};
pub use event::{Event, NewEvent};
pub use place::Place;
pub use user::{NewUser, User};
