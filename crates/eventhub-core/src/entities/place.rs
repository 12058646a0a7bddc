//! Place - a point of interest returned by the geocoder

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinates;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub place_name: String,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
