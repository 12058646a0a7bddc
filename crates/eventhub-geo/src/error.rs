//! Geocoder error types

use eventhub_core::DomainError;

/// Error type for geocoder operations
#[derive(Debug, thiserror::Error)]
pub enum GeocoderError {
    #[error("Mapbox access token is not configured")]
    MissingAccessToken,

    #[error("Invalid geocoder URL: {0}")]
    InvalidUrl(String),

    #[error("Geocoder request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Geocoder responded with HTTP {status}")]
    Status { status: u16 },

    #[error("No match for address: {0}")]
    NoMatch(String),

    #[error("Malformed geocoder response: {0}")]
    Malformed(String),
}

/// Result type for geocoder operations
pub type GeocoderResult<T> = Result<T, GeocoderError>;

impl From<GeocoderError> for DomainError {
    fn from(err: GeocoderError) -> Self {
        match err {
            GeocoderError::NoMatch(address) => DomainError::LocationNotFound(address),
            other => DomainError::GeocodingError(other.to_string()),
        }
    }
}
