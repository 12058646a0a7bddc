//! Mapbox client configuration

use std::time::Duration;

/// Upper bound on places returned by a proximity search
pub const NEARBY_LIMIT: u8 = 10;

/// Mapbox client configuration
#[derive(Debug, Clone)]
pub struct MapboxConfig {
    /// Access token sent with every request
    pub access_token: Option<String>,
    /// API origin, e.g. `https://api.mapbox.com`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for MapboxConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            base_url: "https://api.mapbox.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl From<&eventhub_common::GeocodingConfig> for MapboxConfig {
    fn from(config: &eventhub_common::GeocodingConfig) -> Self {
        Self {
            access_token: config.access_token.clone(),
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}
