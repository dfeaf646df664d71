use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{Coordinate, ErrorResponse};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddressError {
    #[error("Invalid latitude {value}. Must be between {min} and {max}.")]
    InvalidLatitude { value: f64, min: f64, max: f64 },

    #[error("Invalid longitude {value}. Must be between {min} and {max}.")]
    InvalidLongitude { value: f64, min: f64, max: f64 },

    #[error("Invalid distance {value}. Must be at least {min}.")]
    InvalidDistance { value: f64, min: f64 },

    #[error(
        "An address already exists at ({}, {}).",
        .coordinate.latitude,
        .coordinate.longitude
    )]
    DuplicateCoordinate { coordinate: Coordinate },

    #[error("Address {id} not found.")]
    NotFound { id: i64 },

    #[error(
        "lat, long and distance must be given together. Missing: {}.",
        .missing.join(", ")
    )]
    MissingQueryParameter { missing: Vec<&'static str> },
}

impl AddressError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AddressError::InvalidLatitude { .. }
            | AddressError::InvalidLongitude { .. }
            | AddressError::InvalidDistance { .. }
            | AddressError::DuplicateCoordinate { .. } => StatusCode::BAD_REQUEST,
            AddressError::NotFound { .. } => StatusCode::NOT_FOUND,
            AddressError::MissingQueryParameter { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AddressError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let invalid = AddressError::InvalidDistance {
            value: -0.1,
            min: 0.0,
        };
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        let duplicate = AddressError::DuplicateCoordinate {
            coordinate: Coordinate::new(2.1, 3.0),
        };
        assert_eq!(duplicate.status_code(), StatusCode::BAD_REQUEST);

        assert_eq!(
            AddressError::NotFound { id: 400 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AddressError::MissingQueryParameter {
                missing: vec!["distance"]
            }
            .status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_messages_carry_value_and_bounds() {
        let err = AddressError::InvalidLatitude {
            value: 91.0,
            min: -90.0,
            max: 90.0,
        };
        assert_eq!(err.to_string(), "Invalid latitude 91. Must be between -90 and 90.");

        let err = AddressError::MissingQueryParameter {
            missing: vec!["long", "distance"],
        };
        assert_eq!(
            err.to_string(),
            "lat, long and distance must be given together. Missing: long, distance."
        );
    }

    #[test]
    fn test_into_response_uses_status() {
        let response = AddressError::NotFound { id: 1 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
