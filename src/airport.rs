//! Static airport reference data and nearest-airfield search.

use crate::geo::{distance, GeoPoint};
use crate::units::Length;

use serde::{Deserialize, Serialize};

/// Airfield size class, consumed as-is from the host's airport data
/// set. Only used for filtering (map display significance).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirportSize {
    #[default]
    Small,
    Medium,
    Large,
}

/// Static airport record, as parsed from the host's airport data set.
#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct Airport {
    /// IATA code
    pub iata: String,
    /// Display name
    pub name: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
    /// Data-set status flag, positive for operational fields
    #[serde(default = "default_status")]
    pub status: i32,
    /// Size class
    #[serde(default)]
    pub size: AirportSize,
}

fn default_status() -> i32 {
    1
}

impl Airport {
    /// Builds a new operational [Airport].
    pub fn new(iata: &str, name: &str, lat: f64, lon: f64) -> Self {
        Self {
            iata: iata.to_string(),
            name: name.to_string(),
            lat,
            lon,
            status: default_status(),
            size: AirportSize::default(),
        }
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    /// Operational and with usable coordinates.
    pub fn is_valid(&self) -> bool {
        self.status > 0 && self.lat.is_finite() && self.lon.is_finite()
    }

    /// Significant enough for map display.
    pub fn is_sized(&self) -> bool {
        self.size == AirportSize::Large
    }
}

impl std::fmt::Display for Airport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.iata, self.name)
    }
}

/// Nearest airfield to a position, recomputed per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestAirport {
    pub airport: Airport,
    pub distance: Length,
}

/// Returns the valid [Airport] with minimal great-circle distance to
/// `position`, or `None` when no valid airport exists. Ties break on
/// the earlier list entry. O(n) scan, the airport set is small and
/// this runs once per GPS fix.
pub fn nearest_airport(position: GeoPoint, airports: &[Airport]) -> Option<NearestAirport> {
    let mut nearest: Option<NearestAirport> = None;

    for airport in airports.iter().filter(|a| a.is_valid()) {
        let d = distance(position, airport.position());
        match &nearest {
            Some(found) if d.meters() >= found.distance.meters() => {},
            _ => {
                nearest = Some(NearestAirport {
                    airport: airport.clone(),
                    distance: d,
                });
            },
        }
    }

    nearest
}
