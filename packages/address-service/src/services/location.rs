use tracing::trace;

use crate::models::{Address, Coordinate};

/// IUGG mean Earth radius in kilometers. Same value `geo` uses for its
/// haversine, so distances agree with `geo::HaversineDistance`.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance between two points in kilometers (haversine)
pub fn great_circle_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can push sqrt(a) just past 1.0 near antipodes
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

/// Whether `point` lies within `radius` km of `center`, boundary included
pub fn is_in_radius(point: &Coordinate, center: &Coordinate, radius: f64) -> bool {
    let distance = great_circle_distance(point, center);
    trace!(
        "h(({}, {}), ({}, {})) = {:.4}km; radius = {}km",
        point.latitude,
        point.longitude,
        center.latitude,
        center.longitude,
        distance,
        radius
    );
    distance <= radius
}

/// Keep the addresses within `radius` km of `center`, in their original order
pub fn filter_in_radius(addresses: Vec<Address>, center: &Coordinate, radius: f64) -> Vec<Address> {
    addresses
        .into_iter()
        .filter(|address| is_in_radius(&address.coordinate(), center, radius))
        .collect()
}
