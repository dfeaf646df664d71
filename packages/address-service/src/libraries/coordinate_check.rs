use crate::{error::AddressError, models::Coordinate};

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
pub const MIN_DISTANCE: f64 = 0.0;

// NaN fails every comparison below, so it is never valid.

pub fn is_valid_latitude(latitude: f64) -> bool {
    (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude)
}

pub fn is_valid_longitude(longitude: f64) -> bool {
    (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
}

/// Distances are in kilometers. Infinity is rejected along with NaN.
pub fn is_valid_distance(distance: f64) -> bool {
    distance >= MIN_DISTANCE && distance.is_finite()
}

/// Check both halves of a coordinate, latitude first
pub fn validate_coordinate(coordinate: &Coordinate) -> Result<(), AddressError> {
    if !is_valid_latitude(coordinate.latitude) {
        return Err(AddressError::InvalidLatitude {
            value: coordinate.latitude,
            min: MIN_LATITUDE,
            max: MAX_LATITUDE,
        });
    }

    if !is_valid_longitude(coordinate.longitude) {
        return Err(AddressError::InvalidLongitude {
            value: coordinate.longitude,
            min: MIN_LONGITUDE,
            max: MAX_LONGITUDE,
        });
    }

    Ok(())
}

pub fn validate_distance(distance: f64) -> Result<(), AddressError> {
    if !is_valid_distance(distance) {
        return Err(AddressError::InvalidDistance {
            value: distance,
            min: MIN_DISTANCE,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_bounds() {
        assert!(is_valid_latitude(90.0));
        assert!(is_valid_latitude(-90.0));
        assert!(is_valid_latitude(0.0));

        assert!(!is_valid_latitude(91.0));
        assert!(!is_valid_latitude(-90.1));
    }

    #[test]
    fn test_longitude_bounds() {
        assert!(is_valid_longitude(180.0));
        assert!(is_valid_longitude(-180.0));

        assert!(!is_valid_longitude(180.1));
        assert!(!is_valid_longitude(-180.1));
    }

    #[test]
    fn test_distance_bounds() {
        assert!(is_valid_distance(0.0));
        assert!(is_valid_distance(50.0));

        assert!(!is_valid_distance(-0.1));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        assert!(!is_valid_latitude(f64::NAN));
        assert!(!is_valid_longitude(f64::NAN));
        assert!(!is_valid_distance(f64::NAN));

        assert!(!is_valid_latitude(f64::INFINITY));
        assert!(!is_valid_longitude(f64::NEG_INFINITY));
        assert!(!is_valid_distance(f64::INFINITY));
    }

    #[test]
    fn test_validate_coordinate_reports_field() {
        assert!(validate_coordinate(&Coordinate::new(90.0, -180.0)).is_ok());

        assert!(matches!(
            validate_coordinate(&Coordinate::new(91.0, 0.0)),
            Err(AddressError::InvalidLatitude { value, .. }) if value == 91.0
        ));

        assert!(matches!(
            validate_coordinate(&Coordinate::new(0.0, -180.1)),
            Err(AddressError::InvalidLongitude { value, min, max })
                if value == -180.1 && min == -180.0 && max == 180.0
        ));
    }

    #[test]
    fn test_latitude_checked_before_longitude() {
        assert!(matches!(
            validate_coordinate(&Coordinate::new(100.0, 200.0)),
            Err(AddressError::InvalidLatitude { .. })
        ));
    }

    #[test]
    fn test_validate_distance() {
        assert!(validate_distance(0.0).is_ok());

        assert!(matches!(
            validate_distance(-0.1),
            Err(AddressError::InvalidDistance { value, min }) if value == -0.1 && min == 0.0
        ));
    }
}
