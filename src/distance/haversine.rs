//! Great-circle distance on a spherical Earth.
//!
//! # Formula
//!
//! ```text
//! a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
//! d = 2R · atan2(√a, √(1−a))
//! ```
//!
//! where φ is latitude, λ is longitude (radians) and R is the mean Earth
//! radius. Error against the WGS-84 ellipsoid stays below 0.5%.
//!
//! # Reference
//!
//! Sinnott, R.W. (1984). "Virtues of the Haversine", *Sky and Telescope*
//! 68(2), 159.

/// Mean Earth radius in meters (IUGG).
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Great-circle distance in meters between two latitude/longitude pairs
/// given in decimal degrees.
///
/// # Examples
///
/// ```
/// use u_tworoute::distance::haversine;
///
/// // One degree of longitude along the equator ≈ 111.2 km.
/// let d = haversine(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111_195.0).abs() < 10.0);
/// assert_eq!(haversine(41.88, -87.66, 41.88, -87.66), 0.0);
/// ```
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let s_phi = (d_phi / 2.0).sin();
    let s_lambda = (d_lambda / 2.0).sin();
    let a = s_phi * s_phi + phi1.cos() * phi2.cos() * s_lambda * s_lambda;
    // Rounding can push `a` a hair above 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}
