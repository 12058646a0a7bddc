//! # eventhub-geo
//!
//! Mapbox-backed implementation of the `Geocoder` port.
//!
//! ## Features
//!
//! - **Forward geocoding**: free-form address to `Coordinates`
//! - **Nearby places**: points of interest around a coordinate
//!
//! ## Example
//!
//! ```ignore
//! use eventhub_geo::{MapboxConfig, MapboxGeocoder};
//! use eventhub_core::traits::Geocoder;
//!
//! let geocoder = MapboxGeocoder::new(MapboxConfig::from(&app_config.geocoding))?;
//! let origin = geocoder.locate("Parque Simon Bolivar, Bogota").await?;
//! let places = geocoder.nearby_places(origin, 500).await?;
//! ```

mod config;
mod error;
mod mapbox;
mod payloads;

pub use config::MapboxConfig;
pub use error::{GeocoderError, GeocoderResult};
pub use mapbox::MapboxGeocoder;
pub use payloads::{Feature, FeatureCollection};
