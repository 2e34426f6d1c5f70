//! Geographic primitives: [GeoPoint] and great-circle distance.

use crate::constants::EARTH_MEAN_RADIUS_M;
use crate::units::Length;

use serde::{Deserialize, Serialize};

/// WGS84 coordinates, treated as spherical by this crate.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees
    pub lat_deg: f64,
    /// Longitude in decimal degrees
    pub lon_deg: f64,
}

impl GeoPoint {
    /// Builds a new [GeoPoint] from decimal degrees.
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}°, {:.5}°)", self.lat_deg, self.lon_deg)
    }
}

/// Great-circle distance between two points (haversine formula,
/// mean Earth radius). Symmetric, always finite and non-negative for
/// finite inputs.
pub fn distance(a: GeoPoint, b: GeoPoint) -> Length {
    let (phi_1, phi_2) = (a.lat_deg.to_radians(), b.lat_deg.to_radians());
    let d_phi = (b.lat_deg - a.lat_deg).to_radians();
    let d_lambda = (b.lon_deg - a.lon_deg).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (d_lambda / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Length::from_meters(EARTH_MEAN_RADIUS_M * c)
}
