//! Event directory service
//!
//! Event CRUD with address geocoding, plus nearby-place lookups.

use eventhub_core::entities::{Event, NewEvent};
use eventhub_core::{CalendarDate, Coordinates, DomainError, RecordId};
use tracing::{info, instrument};

use crate::dto::{
    CreateEventRequest, EventNearbyPlacesRequest, EventResponse, NearbyPlacesRequest,
    NearbyPlacesResponse, UpdateEventRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All events ordered by id
    #[instrument(skip(self))]
    pub async fn list_events(&self) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().find_all().await?;
        Ok(events.iter().map(EventResponse::from).collect())
    }

    /// Get event by ID
    #[instrument(skip(self))]
    pub async fn get_event(&self, event_id: RecordId) -> ServiceResult<EventResponse> {
        let event = self.get_event_entity(event_id).await?;
        Ok(EventResponse::from(&event))
    }

    /// Get event entity by ID
    #[instrument(skip(self))]
    pub async fn get_event_entity(&self, event_id: RecordId) -> ServiceResult<Event> {
        self.ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(event_id).into())
    }

    /// Create an event, geocoding its address
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_event(
        &self,
        owner_id: RecordId,
        request: CreateEventRequest,
    ) -> ServiceResult<EventResponse> {
        let event_date = CalendarDate::parse(&request.date)?.midnight();
        let location = self.ctx.geocoder().locate(&request.location).await?;

        let new_event = NewEvent::new(
            owner_id,
            request.name,
            request.description,
            location,
            event_date,
        );
        let event = self.ctx.event_repo().create(&new_event).await?;

        info!(event_id = %event.id, owner_id = %owner_id, location = %event.location, "Event created");
        Ok(EventResponse::from(&event))
    }

    /// Read-merge-write of a full event row; the attendance counter is kept
    #[instrument(skip(self, request))]
    pub async fn update_event(
        &self,
        event_id: RecordId,
        request: UpdateEventRequest,
    ) -> ServiceResult<EventResponse> {
        let mut event = self.get_event_entity(event_id).await?;

        if let Some(name) = request.name {
            event.name = name;
        }

        if let Some(description) = request.description {
            event.description = description;
        }

        if let Some(address) = request.location {
            event.location = self.ctx.geocoder().locate(&address).await?.encode();
        }

        if let Some(date) = request.date {
            event.event_date = Some(CalendarDate::parse(&date)?.midnight());
        }

        let updated = self.ctx.event_repo().update(&event).await?;

        info!(event_id = %event_id, "Event updated");
        Ok(EventResponse::from(&updated))
    }

    /// Delete an event and, by cascade, its attendance records
    #[instrument(skip(self))]
    pub async fn delete_event(&self, event_id: RecordId) -> ServiceResult<()> {
        self.ctx.event_repo().delete(event_id).await?;
        info!(event_id = %event_id, "Event deleted");
        Ok(())
    }

    /// Points of interest around a coordinate
    #[instrument(skip(self))]
    pub async fn nearby_places(
        &self,
        request: NearbyPlacesRequest,
    ) -> ServiceResult<NearbyPlacesResponse> {
        let origin = Coordinates::new(request.lon, request.lat)?;
        self.lookup_places(origin, request.range).await
    }

    /// Points of interest around an event's stored location
    #[instrument(skip(self))]
    pub async fn nearby_places_for_event(
        &self,
        event_id: RecordId,
        request: EventNearbyPlacesRequest,
    ) -> ServiceResult<NearbyPlacesResponse> {
        let event = self.get_event_entity(event_id).await?;
        let origin = event.coordinates().map_err(|_| {
            ServiceError::validation(format!(
                "Event {event_id} has no usable location: {}",
                event.location
            ))
        })?;

        self.lookup_places(origin, request.range).await
    }

    async fn lookup_places(
        &self,
        origin: Coordinates,
        range: u32,
    ) -> ServiceResult<NearbyPlacesResponse> {
        let places = self.ctx.geocoder().nearby_places(origin, range).await?;
        Ok(NearbyPlacesResponse {
            origin,
            range,
            places,
        })
    }
}
