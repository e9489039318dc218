//! Spherical geometry helpers.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points given in degrees.
///
/// # Examples
///
/// ```
/// use tripwise_server::stations::geo::haversine_km;
///
/// let d = haversine_km(18.9322, 72.8264, 19.0176, 72.8436);
/// assert!((d - 9.67).abs() < 0.05);
/// ```
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round to one decimal place.
///
/// Uses `f64::round` on the scaled value, which rounds half away from zero.
/// Distances are never negative, so this is round-half-up in practice.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
