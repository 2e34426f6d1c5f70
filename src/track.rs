//! Flight track model: [TrackPoint], [FlightPath] and the [GpsSample]
//! pushed by the host per GPS fix.

use crate::geo::GeoPoint;
use crate::prelude::Epoch;

/// One recorded point of a flight track. Immutable once created,
/// either at sample-arrival time (live track) or at import time
/// (reference track).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    /// Position
    pub point: GeoPoint,
    /// Altitude above sea level, in meters
    pub alt_m: f64,
    /// Sampling instant
    pub epoch: Epoch,
}

impl TrackPoint {
    /// Builds a new [TrackPoint].
    pub fn new(point: GeoPoint, alt_m: f64, epoch: Epoch) -> Self {
        Self { point, alt_m, epoch }
    }

    /// Builds a new [TrackPoint] from a Unix millisecond timestamp,
    /// the wire format of recorded flight paths.
    pub fn from_unix_milliseconds(lat_deg: f64, lon_deg: f64, alt_m: f64, unix_ms: i64) -> Self {
        Self {
            point: GeoPoint::new(lat_deg, lon_deg),
            alt_m,
            epoch: Epoch::from_unix_milliseconds(unix_ms as f64),
        }
    }

    /// Sampling instant as Unix milliseconds.
    pub fn unix_milliseconds(&self) -> i64 {
        self.epoch.to_unix_milliseconds().round() as i64
    }
}

/// One GPS fix as delivered by the host's position source.
/// Unlike [TrackPoint], the altitude may be missing: consumer-grade
/// receivers drop it on poor fixes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsSample {
    /// Position
    pub point: GeoPoint,
    /// Altitude above sea level, in meters, when the fix carried one
    pub alt_m: Option<f64>,
    /// Sampling instant
    pub epoch: Epoch,
}

impl GpsSample {
    /// Builds a new [GpsSample].
    pub fn new(point: GeoPoint, alt_m: Option<f64>, epoch: Epoch) -> Self {
        Self { point, alt_m, epoch }
    }

    /// Builds a new [GpsSample] from a Unix millisecond timestamp.
    pub fn from_unix_milliseconds(
        lat_deg: f64,
        lon_deg: f64,
        alt_m: Option<f64>,
        unix_ms: i64,
    ) -> Self {
        Self {
            point: GeoPoint::new(lat_deg, lon_deg),
            alt_m,
            epoch: Epoch::from_unix_milliseconds(unix_ms as f64),
        }
    }

    /// Converts to a [TrackPoint] for recording. A missing altitude is
    /// recorded as 0, matching the recorded-track convention.
    pub fn to_track_point(&self) -> TrackPoint {
        TrackPoint::new(self.point, self.alt_m.unwrap_or(0.0), self.epoch)
    }
}

/// Ordered sequence of [TrackPoint]s, insertion order is chronological
/// order by convention (not enforced). The live flavor only ever grows
/// by appending the newest point; the reference flavor is loaded once
/// and never modified.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct FlightPath {
    points: Vec<TrackPoint>,
}

impl FlightPath {
    /// Builds an empty [FlightPath].
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a [FlightPath] from already ordered points
    /// (typically a parsed reference track).
    pub fn from_points(points: Vec<TrackPoint>) -> Self {
        Self { points }
    }

    /// Appends the newest point. The only mutation a live path sees.
    pub fn push(&mut self, point: TrackPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&TrackPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&TrackPoint> {
        self.points.last()
    }

    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackPoint> {
        self.points.iter()
    }

    /// Points above the altitude threshold, order preserved.
    /// Used by the arrival estimator to strip ground/takeoff/landing
    /// noise from both tracks.
    pub(crate) fn above_altitude(&self, min_alt_m: f64) -> Vec<TrackPoint> {
        self.points
            .iter()
            .filter(|p| p.alt_m > min_alt_m)
            .copied()
            .collect()
    }
}
