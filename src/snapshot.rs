use crate::airport::NearestAirport;
use crate::geo::GeoPoint;
use crate::prelude::Epoch;
use crate::units::{Length, Speed};

/// Per-sample statistics, assembled by [crate::tracker::FlightTracker]
/// on every GPS fix. Immutable; the next fix supersedes it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSnapshot {
    /// Position of the fix this snapshot was computed for
    pub position: GeoPoint,

    /// Altitude of the fix, when it carried one
    pub altitude_m: Option<f64>,

    /// Sampling instant
    pub epoch: Epoch,

    /// Mean ground speed over the recent-fix window
    pub speed: Speed,

    /// Mean vertical speed over the recent-fix window
    pub vertical_speed: Speed,

    /// Nearest valid airfield, `None` when the airport list holds no
    /// valid entry
    pub nearest_airport: Option<NearestAirport>,

    /// Estimated arrival instant, `None` when no reference track is
    /// configured or the estimator cannot match the tracks
    pub eta: Option<Epoch>,

    /// Great-circle distance to the configured destination airport,
    /// `None` when no destination is configured
    pub distance_to_destination: Option<Length>,
}
