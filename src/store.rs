//! Flight path persistence over a host-provided key-value store.
//!
//! The core performs no I/O itself: the host injects a
//! [KeyValueStore] implementation (browser storage, a file, a
//! database row) and [FlightPathStore] handles the wire schema, a
//! JSON document of `{lat, lon, alt, timestamp}` records with
//! timestamps in Unix milliseconds.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::track::{FlightPath, TrackPoint};

/// Storage key of the live flight path.
pub const FLIGHT_PATH_KEY: &str = "flightPath";

/// Minimal synchronous key-value interface the host must provide.
/// Injected explicitly, never reached through globals, so the core
/// and its tests never depend on ambient state.
pub trait KeyValueStore {
    /// Returns the stored value, `None` when the key was never set.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, Error>;

    /// Stores a value, overwriting any previous one.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), Error>;

    /// Removes a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), Error>;
}

/// In-memory [KeyValueStore], for tests and hosts without durable
/// storage.
#[derive(Default, Debug, Clone)]
pub struct MemoryStore {
    inner: std::collections::HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.inner.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), Error> {
        self.inner.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        self.inner.remove(key);
        Ok(())
    }
}

/// One persisted track point. Field names and the camelCase document
/// key match the recorded-flight JSON schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TrackPointRecord {
    lat: f64,
    lon: f64,
    alt: f64,
    /// Unix milliseconds
    timestamp: i64,
}

impl From<&TrackPoint> for TrackPointRecord {
    fn from(point: &TrackPoint) -> Self {
        Self {
            lat: point.point.lat_deg,
            lon: point.point.lon_deg,
            alt: point.alt_m,
            timestamp: point.unix_milliseconds(),
        }
    }
}

impl From<&TrackPointRecord> for TrackPoint {
    fn from(record: &TrackPointRecord) -> Self {
        TrackPoint::from_unix_milliseconds(record.lat, record.lon, record.alt, record.timestamp)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlightPathDocument {
    track_points: Vec<TrackPointRecord>,
}

/// Persists the live [FlightPath] across sessions, one JSON document
/// under [FLIGHT_PATH_KEY].
pub struct FlightPathStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> FlightPathStore<S> {
    /// Builds a new [FlightPathStore] over the injected backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Loads the persisted flight path. A missing key yields an empty
    /// path, not an error.
    pub fn load(&self) -> Result<FlightPath, Error> {
        match self.storage.get(FLIGHT_PATH_KEY)? {
            None => Ok(FlightPath::new()),
            Some(bytes) => {
                let document: FlightPathDocument = serde_json::from_slice(&bytes)?;
                let points = document.track_points.iter().map(TrackPoint::from).collect();
                Ok(FlightPath::from_points(points))
            },
        }
    }

    /// Appends one point to the persisted path.
    pub fn append(&mut self, point: TrackPoint) -> Result<(), Error> {
        let mut path = self.load()?;
        path.push(point);
        self.save(&path)
    }

    /// Persists the whole path, overwriting the stored document.
    pub fn save(&mut self, path: &FlightPath) -> Result<(), Error> {
        let document = FlightPathDocument {
            track_points: path.iter().map(TrackPointRecord::from).collect(),
        };
        let bytes = serde_json::to_vec(&document)?;
        self.storage.set(FLIGHT_PATH_KEY, &bytes)
    }

    /// Drops the persisted path.
    pub fn clear(&mut self) -> Result<(), Error> {
        self.storage.remove(FLIGHT_PATH_KEY)
    }

    /// Persisted path as a JSON string, for host-side export.
    pub fn export_json(&self) -> Result<String, Error> {
        let path = self.load()?;
        let document = FlightPathDocument {
            track_points: path.iter().map(TrackPointRecord::from).collect(),
        };
        Ok(serde_json::to_string(&document)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_key_is_empty_path() {
        let store = FlightPathStore::new(MemoryStore::new());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn round_trip_preserves_order_and_timestamps() {
        let mut store = FlightPathStore::new(MemoryStore::new());

        store
            .append(TrackPoint::from_unix_milliseconds(32.0, 34.0, 100.0, 1_700_000_000_001))
            .unwrap();
        store
            .append(TrackPoint::from_unix_milliseconds(32.1, 34.1, 900.0, 1_700_000_060_002))
            .unwrap();

        let path = store.load().unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.first().unwrap().unix_milliseconds(), 1_700_000_000_001);
        assert_eq!(path.last().unwrap().unix_milliseconds(), 1_700_000_060_002);
        assert_eq!(path.last().unwrap().alt_m, 900.0);
    }

    #[test]
    fn clear_then_load() {
        let mut store = FlightPathStore::new(MemoryStore::new());
        store
            .append(TrackPoint::from_unix_milliseconds(0.0, 0.0, 0.0, 1_000))
            .unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn document_schema_is_camel_case() {
        let mut store = FlightPathStore::new(MemoryStore::new());
        store
            .append(TrackPoint::from_unix_milliseconds(1.5, 2.5, 3.5, 4))
            .unwrap();
        let json = store.export_json().unwrap();
        assert!(json.contains("\"trackPoints\""), "got {}", json);
        assert!(json.contains("\"timestamp\":4"), "got {}", json);
    }
}
