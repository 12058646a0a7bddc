//! In-memory fakes of the core ports for service tests

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use eventhub_common::auth::JwtService;
use eventhub_core::entities::{Attendance, Event, NewAttendance, NewEvent, NewUser, Place, User};
use eventhub_core::traits::{
    AttendanceRepository, EventRepository, Geocoder, RepoResult, UserRepository,
};
use eventhub_core::{Coordinates, DomainError, RecordId, WeekdayLabels};
use sqlx::postgres::PgPoolOptions;

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    next_id: i64,
    events: BTreeMap<RecordId, Event>,
    attendance: BTreeMap<RecordId, Attendance>,
    users: BTreeMap<RecordId, (User, String)>,
}

impl State {
    fn next_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId::new(self.next_id)
    }
}

/// Store with the same counter semantics as the Postgres repositories
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn event(&self, id: RecordId) -> Option<Event> {
        self.state.lock().unwrap().events.get(&id).cloned()
    }

    pub fn attendance_count(&self) -> usize {
        self.state.lock().unwrap().attendance.len()
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Event>> {
        Ok(self.event(id))
    }

    async fn find_all(&self) -> RepoResult<Vec<Event>> {
        Ok(self.state.lock().unwrap().events.values().cloned().collect())
    }

    async fn exists(&self, id: RecordId) -> RepoResult<bool> {
        Ok(self.state.lock().unwrap().events.contains_key(&id))
    }

    async fn create(&self, event: &NewEvent) -> RepoResult<Event> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let created = Event {
            id,
            user_id: event.user_id,
            name: event.name.clone(),
            description: event.description.clone(),
            created_date: Utc::now(),
            location: event.location.encode(),
            assistance: 0,
            event_date: Some(event.event_date),
        };
        state.events.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, event: &Event) -> RepoResult<Event> {
        let mut state = self.state.lock().unwrap();
        let stored = state
            .events
            .get_mut(&event.id)
            .ok_or(DomainError::EventNotFound(event.id))?;
        let assistance = stored.assistance;
        *stored = Event {
            assistance,
            ..event.clone()
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .events
            .remove(&id)
            .ok_or(DomainError::EventNotFound(id))?;
        state.attendance.retain(|_, a| a.event_id != id);
        Ok(())
    }
}

#[async_trait]
impl AttendanceRepository for InMemoryStore {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Attendance>> {
        Ok(self.state.lock().unwrap().attendance.get(&id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Attendance>> {
        Ok(self.state.lock().unwrap().attendance.values().cloned().collect())
    }

    async fn find_by_event(&self, event_id: RecordId) -> RepoResult<Vec<Attendance>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .attendance
            .values()
            .filter(|a| a.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn find_by_user(&self, user_id: RecordId) -> RepoResult<Vec<Attendance>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .attendance
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn register(&self, attendance: &NewAttendance) -> RepoResult<Attendance> {
        let mut state = self.state.lock().unwrap();
        let event = state
            .events
            .get_mut(&attendance.event_id)
            .ok_or(DomainError::EventNotFound(attendance.event_id))?;
        event.assistance += 1;

        let id = state.next_id();
        let stored = Attendance {
            id,
            event_id: attendance.event_id,
            user_id: attendance.user_id,
            date: attendance.date.midnight(),
        };
        state.attendance.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: RecordId, attendance: &NewAttendance) -> RepoResult<Attendance> {
        let mut state = self.state.lock().unwrap();
        let previous = state
            .attendance
            .get(&id)
            .map(|a| a.event_id)
            .ok_or(DomainError::AttendanceNotFound(id))?;

        if previous != attendance.event_id {
            let next = state
                .events
                .get_mut(&attendance.event_id)
                .ok_or(DomainError::AssociatedEventNotFound(attendance.event_id))?;
            next.assistance += 1;
            if let Some(old) = state.events.get_mut(&previous) {
                old.assistance = (old.assistance - 1).max(0);
            }
        }

        let stored = Attendance {
            id,
            event_id: attendance.event_id,
            user_id: attendance.user_id,
            date: attendance.date.midnight(),
        };
        state.attendance.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        let removed = state
            .attendance
            .remove(&id)
            .ok_or(DomainError::AttendanceNotFound(id))?;
        if let Some(event) = state.events.get_mut(&removed.event_id) {
            event.assistance = (event.assistance - 1).max(0);
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(&id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .values()
            .map(|(u, _)| u)
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.values().map(|(u, _)| u.clone()).collect())
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(UserRepository::find_by_email(self, email).await?.is_some())
    }

    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut state = self.state.lock().unwrap();
        if state.users.values().any(|(u, _)| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        let id = state.next_id();
        let created = User {
            id,
            email: user.email.clone(),
            name: user.name.clone(),
            registration_date: Utc::now(),
        };
        state
            .users
            .insert(id, (created.clone(), password_hash.to_string()));
        Ok(created)
    }

    async fn update(&self, user: &User) -> RepoResult<User> {
        let mut state = self.state.lock().unwrap();
        let (stored, _) = state
            .users
            .get_mut(&user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        stored.email.clone_from(&user.email);
        stored.name.clone_from(&user.name);
        Ok(stored.clone())
    }

    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::UserNotFound(id))
    }

    async fn get_password_hash(&self, id: RecordId) -> RepoResult<Option<String>> {
        Ok(self.state.lock().unwrap().users.get(&id).map(|(_, h)| h.clone()))
    }

    async fn update_password(&self, id: RecordId, password_hash: &str) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        let (_, hash) = state
            .users
            .get_mut(&id)
            .ok_or(DomainError::UserNotFound(id))?;
        *hash = password_hash.to_string();
        Ok(())
    }
}

/// Resolves every address to a fixed point, except `"Nowhere"`
pub struct FixedGeocoder;

pub const FIXED_POINT: (f64, f64) = (-74.0721, 4.711);

#[async_trait]
impl Geocoder for FixedGeocoder {
    async fn locate(&self, address: &str) -> Result<Coordinates, DomainError> {
        if address == "Nowhere" {
            return Err(DomainError::LocationNotFound(address.to_string()));
        }
        Coordinates::new(FIXED_POINT.0, FIXED_POINT.1)
    }

    async fn nearby_places(
        &self,
        origin: Coordinates,
        _radius_meters: u32,
    ) -> Result<Vec<Place>, DomainError> {
        Ok(vec![Place {
            id: "poi.1".to_string(),
            name: "Cafe".to_string(),
            place_name: "Cafe, Bogota".to_string(),
            coordinates: origin,
            category: Some("cafe".to_string()),
        }])
    }
}

/// Context over a shared in-memory store; the pool never connects
pub fn test_context(store: &Arc<InMemoryStore>) -> ServiceContext {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/eventhub_test")
        .unwrap();

    ServiceContextBuilder::new()
        .pool(pool)
        .event_repo(store.clone())
        .attendance_repo(store.clone())
        .user_repo(store.clone())
        .geocoder(Arc::new(FixedGeocoder))
        .jwt_service(Arc::new(JwtService::new(
            "test-secret-key-that-is-long-enough",
            900,
            604_800,
        )))
        .tally_labels(WeekdayLabels::English)
        .build()
        .unwrap()
}
