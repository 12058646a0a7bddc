//! Event entity <-> model mapper

use chrono::NaiveDateTime;
use eventhub_core::entities::{Event, NewEvent};
use eventhub_core::value_objects::RecordId;

use crate::models::EventModel;

/// Convert EventModel to Event entity
impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: RecordId::new(model.event_id),
            user_id: RecordId::new(model.user_id),
            name: model.name,
            description: model.description,
            created_date: model.created_date,
            location: model.location,
            assistance: model.assistance,
            event_date: model.event_date,
        }
    }
}

/// Column values for inserting a new event
pub struct EventInsert<'a> {
    pub user_id: i64,
    pub name: &'a str,
    pub description: &'a str,
    pub location: String,
    pub event_date: NaiveDateTime,
}

impl<'a> EventInsert<'a> {
    pub fn new(event: &'a NewEvent) -> Self {
        Self {
            user_id: event.user_id.into_inner(),
            name: &event.name,
            description: &event.description,
            location: event.location.encode(),
            event_date: event.event_date,
        }
    }
}

/// Column values written by a full update (the counter is never part of it)
pub struct EventUpdate<'a> {
    pub event_id: i64,
    pub user_id: i64,
    pub name: &'a str,
    pub description: &'a str,
    pub created_date: chrono::DateTime<chrono::Utc>,
    pub location: &'a str,
    pub event_date: Option<NaiveDateTime>,
}

impl<'a> EventUpdate<'a> {
    pub fn new(event: &'a Event) -> Self {
        Self {
            event_id: event.id.into_inner(),
            user_id: event.user_id.into_inner(),
            name: &event.name,
            description: &event.description,
            created_date: event.created_date,
            location: &event.location,
            event_date: event.event_date,
        }
    }
}
