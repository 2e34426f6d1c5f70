#![doc = include_str!("../README.md")]

// private modules
mod airport;
mod cfg;
mod constants;
mod error;
mod eta;
mod geo;
mod kinematics;
mod snapshot;
mod store;
mod track;
mod tracker;
mod units;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::airport::{nearest_airport, Airport, AirportSize, NearestAirport};
    pub use crate::cfg::Config;
    pub use crate::constants::EARTH_MEAN_RADIUS_M;
    pub use crate::error::Error;
    pub use crate::eta::{estimate_arrival, estimate_arrival_above, DEFAULT_PHASE_ALTITUDE_M};
    pub use crate::geo::{distance, GeoPoint};
    pub use crate::kinematics::{mean_speed, mean_vertical_speed, SampleWindow};
    pub use crate::snapshot::StatisticsSnapshot;
    pub use crate::store::{FlightPathStore, KeyValueStore, MemoryStore, FLIGHT_PATH_KEY};
    pub use crate::track::{FlightPath, GpsSample, TrackPoint};
    pub use crate::tracker::FlightTracker;
    pub use crate::units::{Length, LengthUnit, Speed, SpeedUnit};
    // re-export
    pub use hifitime::{Duration, Epoch};
}

// pub export
pub use error::Error;
