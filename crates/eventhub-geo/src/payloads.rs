//! Mapbox geocoding response payloads (the subset in use)

use eventhub_core::{Coordinates, Place};
use serde::Deserialize;

use crate::error::GeocoderError;

/// `FeatureCollection` returned by `mapbox.places`
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A single geocoding match
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub place_name: String,
    /// `[longitude, latitude]`
    pub center: [f64; 2],
    #[serde(default)]
    pub properties: FeatureProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureProperties {
    pub category: Option<String>,
}

impl Feature {
    /// Coordinates of the feature's center point
    pub fn coordinates(&self) -> Result<Coordinates, GeocoderError> {
        let [longitude, latitude] = self.center;
        Coordinates::new(longitude, latitude).map_err(|e| GeocoderError::Malformed(e.to_string()))
    }
}

impl TryFrom<Feature> for Place {
    type Error = GeocoderError;

    fn try_from(feature: Feature) -> Result<Self, Self::Error> {
        let coordinates = feature.coordinates()?;
        Ok(Place {
            id: feature.id,
            name: feature.text,
            place_name: feature.place_name,
            coordinates,
            category: feature.properties.category,
        })
    }
}
