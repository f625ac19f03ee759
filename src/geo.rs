//! Great-circle distance on a spherical Earth.

/// Mean Earth radius in kilometers (IUGG mean radius).
///
/// The reference distances in the ranking tests are computed against this
/// exact constant; 6371.0 would be off by tens of meters at city scale.
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Haversine distance in kilometers between two `(latitude, longitude)`
/// points given in decimal degrees.
///
/// Pure and total: coordinates are not range-checked, so out-of-range or
/// non-finite inputs produce garbage rather than an error.
pub fn haversine(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lon1) = a;
    let (lat2, lon2) = b;

    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
