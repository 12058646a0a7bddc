//! Entity to model mappers
//!
//! This module provides conversions between domain entities (eventhub-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod attendance;
mod event;
mod user;

pub use attendance::AttendanceInsert;
pub use event::{EventInsert, EventUpdate};
