//! [FlightTracker] is the synchronous per-sample pipeline: one GPS fix
//! in, one [StatisticsSnapshot] out.

use log::debug;

use crate::airport::{nearest_airport, Airport};
use crate::cfg::Config;
use crate::eta::estimate_arrival_above;
use crate::geo::distance;
use crate::kinematics::SampleWindow;
use crate::snapshot::StatisticsSnapshot;
use crate::track::{FlightPath, GpsSample};

/// Per-flight statistics pipeline. The host pushes every incoming GPS
/// fix into [FlightTracker::ingest] and receives one immutable
/// snapshot back; there is no background computation and no I/O.
/// Sample delivery must be serialized by the caller: the live path is
/// the only mutable state and only ever grows by one point per fix.
pub struct FlightTracker {
    /// Configuration, frozen at build time
    cfg: Config,

    /// Recent fixes for the kinematic window
    window: SampleWindow,

    /// Live track of the current session, append only
    live: FlightPath,

    /// Reference track of a completed past flight of the same route,
    /// read only once loaded
    reference: Option<FlightPath>,

    /// Static airfield list
    airports: Vec<Airport>,

    /// Destination airfield (IATA), for the distance-to-destination
    /// statistic
    destination: Option<String>,
}

impl FlightTracker {
    /// Builds a new [FlightTracker] with an empty live track.
    /// ## Input
    /// - cfg: [Config]uration
    /// - airports: static airfield list, consumed as-is
    pub fn new(cfg: Config, airports: Vec<Airport>) -> Self {
        let window = SampleWindow::new(cfg.window_capacity);
        Self {
            cfg,
            window,
            airports,
            live: FlightPath::new(),
            reference: None,
            destination: None,
        }
    }

    /// Loads the reference track to estimate arrivals against.
    /// Until one is loaded, snapshots carry no ETA.
    pub fn set_reference(&mut self, reference: FlightPath) {
        self.reference = Some(reference);
    }

    /// Defines the destination airfield by IATA code, for the
    /// distance-to-destination statistic.
    pub fn set_destination(&mut self, iata: &str) {
        self.destination = Some(iata.to_string());
    }

    /// Restores a previously persisted live track, typically right
    /// after a session restart. Replaces the current live track.
    pub fn restore_live_path(&mut self, live: FlightPath) {
        debug!("restored live path ({} points)", live.len());
        self.live = live;
    }

    /// Live track recorded so far. The host persists this between
    /// sessions through a [crate::store::FlightPathStore].
    pub fn live_path(&self) -> &FlightPath {
        &self.live
    }

    /// Ingests one GPS fix and derives the statistics for it: window
    /// update, kinematic means, nearest airfield, arrival estimate and
    /// destination distance, in one synchronous pass.
    pub fn ingest(&mut self, sample: GpsSample) -> StatisticsSnapshot {
        self.live.push(sample.to_track_point());
        self.window.push(sample);

        let eta = self
            .reference
            .as_ref()
            .and_then(|reference| {
                estimate_arrival_above(&self.live, reference, self.cfg.phase_altitude_m)
            });

        let distance_to_destination = self
            .destination
            .as_ref()
            .and_then(|iata| self.airports.iter().find(|a| &a.iata == iata))
            .map(|airport| distance(sample.point, airport.position()));

        StatisticsSnapshot {
            position: sample.point,
            altitude_m: sample.alt_m,
            epoch: sample.epoch,
            speed: self.window.mean_speed(),
            vertical_speed: self.window.mean_vertical_speed(),
            nearest_airport: nearest_airport(sample.point, &self.airports),
            eta,
            distance_to_destination,
        }
    }
}
