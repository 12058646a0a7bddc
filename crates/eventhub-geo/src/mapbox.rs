//! Mapbox geocoding client

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, info, instrument, warn};

use eventhub_core::error::DomainError;
use eventhub_core::traits::Geocoder;
use eventhub_core::{Coordinates, Place};

use crate::config::{MapboxConfig, NEARBY_LIMIT};
use crate::error::{GeocoderError, GeocoderResult};
use crate::payloads::FeatureCollection;

const PLACES_PATH: [&str; 3] = ["geocoding", "v5", "mapbox.places"];

/// `Geocoder` backed by the Mapbox Geocoding v5 API
#[derive(Clone)]
pub struct MapboxGeocoder {
    client: Client,
    config: MapboxConfig,
}

impl MapboxGeocoder {
    /// Build the HTTP client
    pub fn new(config: MapboxConfig) -> GeocoderResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("eventhub/", env!("CARGO_PKG_VERSION")))
            .build()?;

        if config.access_token.is_none() {
            warn!("MAPBOX_ACCESS_TOKEN is not set; geocoding requests will fail");
        }

        info!(base_url = %config.base_url, "Mapbox geocoder created");

        Ok(Self { client, config })
    }

    fn access_token(&self) -> GeocoderResult<&str> {
        self.config
            .access_token
            .as_deref()
            .ok_or(GeocoderError::MissingAccessToken)
    }

    /// `{base}/geocoding/v5/mapbox.places/{query}.json`, with `query` percent-encoded
    fn places_url(&self, query: &str) -> GeocoderResult<Url> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| GeocoderError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|()| GeocoderError::InvalidUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend(PLACES_PATH)
            .push(&format!("{query}.json"));

        Ok(url)
    }

    async fn fetch(&self, url: Url, params: &[(&str, String)]) -> GeocoderResult<FeatureCollection> {
        let response = self.client.get(url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "Mapbox request failed");
            return Err(GeocoderError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<FeatureCollection>()
            .await
            .map_err(|e| GeocoderError::Malformed(e.to_string()))
    }

    async fn forward(&self, address: &str) -> GeocoderResult<Coordinates> {
        let token = self.access_token()?;
        let url = self.places_url(address)?;

        let collection = self
            .fetch(url, &[("access_token", token.to_string())])
            .await?;

        let feature = collection
            .features
            .into_iter()
            .next()
            .ok_or_else(|| GeocoderError::NoMatch(address.to_string()))?;

        feature.coordinates()
    }

    async fn proximity(&self, origin: Coordinates, radius_meters: u32) -> GeocoderResult<Vec<Place>> {
        let token = self.access_token()?;
        let url = self.places_url(&origin.encode())?;

        let collection = self
            .fetch(
                url,
                &[
                    ("proximity", origin.encode()),
                    ("types", "poi".to_string()),
                    ("limit", NEARBY_LIMIT.to_string()),
                    ("radius", radius_meters.to_string()),
                    ("access_token", token.to_string()),
                ],
            )
            .await?;

        collection
            .features
            .into_iter()
            .map(Place::try_from)
            .collect()
    }
}

#[async_trait]
impl Geocoder for MapboxGeocoder {
    #[instrument(skip(self))]
    async fn locate(&self, address: &str) -> Result<Coordinates, DomainError> {
        let coordinates = self.forward(address).await?;
        debug!(%coordinates, "Address geocoded");
        Ok(coordinates)
    }

    #[instrument(skip(self))]
    async fn nearby_places(
        &self,
        origin: Coordinates,
        radius_meters: u32,
    ) -> Result<Vec<Place>, DomainError> {
        let places = self.proximity(origin, radius_meters).await?;
        debug!(count = places.len(), "Nearby places fetched");
        Ok(places)
    }
}

impl std::fmt::Debug for MapboxGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxGeocoder")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish()
    }
}
