//! Event entity - a scheduled happening people can attend

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{Coordinates, RecordId};

/// Event entity
///
/// `assistance` mirrors the number of attendance rows that reference the
/// event. It only changes inside the ledger's store transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: RecordId,
    pub user_id: RecordId,
    pub name: String,
    pub description: String,
    pub created_date: DateTime<Utc>,
    /// Encoded as `"longitude,latitude"`
    pub location: String,
    pub assistance: i32,
    /// Legacy rows may lack a date
    pub event_date: Option<NaiveDateTime>,
}

impl Event {
    /// Decode the stored location
    pub fn coordinates(&self) -> Result<Coordinates, DomainError> {
        Coordinates::parse(&self.location)
    }
}

/// Data for inserting a new event
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub user_id: RecordId,
    pub name: String,
    pub description: String,
    pub location: Coordinates,
    pub event_date: NaiveDateTime,
}

impl NewEvent {
    /// Create a new event payload; counters start at zero in the store
    pub fn new(
        user_id: RecordId,
        name: String,
        description: String,
        location: Coordinates,
        event_date: NaiveDateTime,
    ) -> Self {
        Self {
            user_id,
            name,
            description,
            location,
            event_date,
        }
    }
}
