//! Geocoding port

use async_trait::async_trait;

use crate::entities::Place;
use crate::error::DomainError;
use crate::value_objects::Coordinates;

/// Forward geocoding and point-of-interest lookups
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a free-form address to coordinates
    ///
    /// Fails with `LocationNotFound` when the provider has no match.
    async fn locate(&self, address: &str) -> Result<Coordinates, DomainError>;

    /// Points of interest within `radius_meters` of `origin`
    async fn nearby_places(
        &self,
        origin: Coordinates,
        radius_meters: u32,
    ) -> Result<Vec<Place>, DomainError>;
}
