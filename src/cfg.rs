use serde::Deserialize;

fn default_window_capacity() -> usize {
    10
}

fn default_phase_altitude_m() -> f64 {
    1_500.0
}

/// Tracker configuration. The defaults match the recorded-track
/// conventions this crate is normally fed with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Number of recent GPS fixes retained for the kinematic window.
    #[serde(default = "default_window_capacity")]
    pub window_capacity: usize,

    /// Altitude threshold (meters) of the arrival estimator's phase
    /// filter. Samples at or below it count as ground/takeoff/landing
    /// noise and are excluded from route matching.
    #[serde(default = "default_phase_altitude_m")]
    pub phase_altitude_m: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_capacity: default_window_capacity(),
            phase_altitude_m: default_phase_altitude_m(),
        }
    }
}
