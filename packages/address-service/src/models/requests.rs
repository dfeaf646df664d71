use serde::{Deserialize, Serialize};

use super::address::Coordinate;
use crate::error::AddressError;

/// Query string of `GET /addresses/`. Either all three are set or none.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub distance: Option<f64>, // kilometers
}

/// What a listing request asks for
#[derive(Debug, Clone, PartialEq)]
pub enum AddressQuery {
    All,
    Radius { center: Coordinate, distance: f64 },
}

impl SearchParams {
    pub fn into_query(self) -> Result<AddressQuery, AddressError> {
        match (self.lat, self.long, self.distance) {
            (None, None, None) => Ok(AddressQuery::All),
            (Some(lat), Some(long), Some(distance)) => Ok(AddressQuery::Radius {
                center: Coordinate::new(lat, long),
                distance,
            }),
            (lat, long, distance) => {
                let missing = [("lat", lat), ("long", long), ("distance", distance)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(name, _)| name)
                    .collect();
                Err(AddressError::MissingQueryParameter { missing })
            }
        }
    }
}

/// Error body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
