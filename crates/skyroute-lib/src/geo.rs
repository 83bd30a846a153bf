//! Great-circle geometry over geographic coordinates.
//!
//! All angles are degrees at the API boundary and radians internally; all
//! distances are nautical miles on a spherical earth.

use serde::{Deserialize, Serialize};

/// Mean earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl GeoPoint {
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }

    /// Whether both components are finite and within geographic range.
    pub fn is_valid(&self) -> bool {
        self.lat_deg.is_finite()
            && self.lon_deg.is_finite()
            && (-90.0..=90.0).contains(&self.lat_deg)
            && (-180.0..=180.0).contains(&self.lon_deg)
    }
}

/// Great-circle distance between two points (haversine formula).
///
/// Symmetric and non-negative; zero iff the points coincide up to floating
/// point tolerance.
pub fn distance_nm(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat_deg.to_radians();
    let phi2 = b.lat_deg.to_radians();
    let dphi = (b.lat_deg - a.lat_deg).to_radians();
    let dlambda = (b.lon_deg - a.lon_deg).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_NM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Initial bearing (forward azimuth) from `a` to `b` in degrees [0, 360).
///
/// Used for reporting only; feasibility never depends on bearing.
pub fn initial_bearing_deg(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat_deg.to_radians();
    let phi2 = b.lat_deg.to_radians();
    let dlambda = (b.lon_deg - a.lon_deg).to_radians();

    let y = dlambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlambda.cos();
    let theta = y.atan2(x).to_degrees();
    (theta + 360.0) % 360.0
}

/// Signed cross-track distance of `point` from the great circle through
/// `start` and `end`. Negative values lie left of the track.
pub fn cross_track_nm(start: GeoPoint, end: GeoPoint, point: GeoPoint) -> f64 {
    let d13 = distance_nm(start, point) / EARTH_RADIUS_NM;
    let theta13 = initial_bearing_deg(start, point).to_radians();
    let theta12 = initial_bearing_deg(start, end).to_radians();

    (d13.sin() * (theta13 - theta12).sin()).asin() * EARTH_RADIUS_NM
}

/// Minimum distance from `point` to the great-circle segment `start`..`end`.
///
/// Falls back to the nearer endpoint when the perpendicular foot lies
/// outside the segment.
pub fn segment_clearance_nm(start: GeoPoint, end: GeoPoint, point: GeoPoint) -> f64 {
    let d12 = distance_nm(start, end);
    if d12 == 0.0 {
        return distance_nm(start, point);
    }

    let d13 = distance_nm(start, point) / EARTH_RADIUS_NM;
    let theta13 = initial_bearing_deg(start, point).to_radians();
    let theta12 = initial_bearing_deg(start, end).to_radians();

    let dxt = (d13.sin() * (theta13 - theta12).sin()).asin();
    // Along-track distance of the perpendicular foot from `start`.
    let dat = (d13.cos() / dxt.cos()).clamp(-1.0, 1.0).acos() * EARTH_RADIUS_NM;

    let behind_start = (theta13 - theta12).cos() < 0.0;
    if behind_start {
        distance_nm(start, point)
    } else if dat > d12 {
        distance_nm(end, point)
    } else {
        (dxt * EARTH_RADIUS_NM).abs()
    }
}
