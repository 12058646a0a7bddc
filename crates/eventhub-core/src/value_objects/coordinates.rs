//! Geographic coordinates stored on events as `"longitude,latitude"`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A WGS84 point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    /// Create coordinates, checking both axes are in range
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, DomainError> {
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates(format!(
                "longitude {longitude} outside [-180, 180]"
            )));
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::InvalidCoordinates(format!(
                "latitude {latitude} outside [-90, 90]"
            )));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Parse the stored `"lon,lat"` form
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let (lon, lat) = s
            .split_once(',')
            .ok_or_else(|| DomainError::InvalidCoordinates(format!("malformed location: {s}")))?;

        let parse_axis = |raw: &str| {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| DomainError::InvalidCoordinates(format!("malformed location: {s}")))
        };

        Self::new(parse_axis(lon)?, parse_axis(lat)?)
    }

    /// Encode to the stored `"lon,lat"` form
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.longitude, self.latitude)
    }
}

impl FromStr for Coordinates {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
