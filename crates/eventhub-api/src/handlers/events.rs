//! Event handlers
//!
//! CRUD over the event directory plus nearby-place lookups.

use axum::extract::{Path, State};
use eventhub_service::{
    CreateEventRequest, EventNearbyPlacesRequest, EventResponse, EventService,
    NearbyPlacesRequest, NearbyPlacesResponse, UpdateEventRequest,
};

use crate::extractors::{AuthUser, EventIdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// List all events
///
/// GET /events
pub async fn list_events(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<ApiJson<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    Ok(ApiJson(service.list_events().await?))
}

/// Create an event owned by the caller
///
/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateEventRequest>,
) -> ApiResult<Created<ApiJson<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let event = service.create_event(auth.user_id, request).await?;
    Ok(Created(ApiJson(event)))
}

/// GET /events/{event_id}
pub async fn get_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<EventIdPath>,
) -> ApiResult<ApiJson<EventResponse>> {
    let service = EventService::new(state.service_context());
    Ok(ApiJson(service.get_event(path.event_id()?).await?))
}

/// PUT /events/{event_id}
pub async fn update_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<EventIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateEventRequest>,
) -> ApiResult<ApiJson<EventResponse>> {
    let service = EventService::new(state.service_context());
    Ok(ApiJson(service.update_event(path.event_id()?, request).await?))
}

/// DELETE /events/{event_id}
pub async fn delete_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<EventIdPath>,
) -> ApiResult<ApiJson<String>> {
    let event_id = path.event_id()?;
    let service = EventService::new(state.service_context());
    service.delete_event(event_id).await?;
    Ok(ApiJson(format!("Event {event_id} deleted")))
}

/// Points of interest around a coordinate
///
/// POST /events/nearby-places
pub async fn nearby_places(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<NearbyPlacesRequest>,
) -> ApiResult<ApiJson<NearbyPlacesResponse>> {
    let service = EventService::new(state.service_context());
    Ok(ApiJson(service.nearby_places(request).await?))
}

/// Points of interest around an event's location
///
/// POST /events/{event_id}/nearby-places
pub async fn event_nearby_places(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<EventIdPath>,
    ValidatedJson(request): ValidatedJson<EventNearbyPlacesRequest>,
) -> ApiResult<ApiJson<NearbyPlacesResponse>> {
    let service = EventService::new(state.service_context());
    let places = service
        .nearby_places_for_event(path.event_id()?, request)
        .await?;
    Ok(ApiJson(places))
}
