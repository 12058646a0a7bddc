//! Ports implemented by the infrastructure crates

mod geocoder;
mod repositories;

pub use geocoder::Geocoder;
pub use repositories::{AttendanceRepository, EventRepository, RepoResult, UserRepository};
