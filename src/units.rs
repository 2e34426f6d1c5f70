//! Canonical-unit measurement values. All values are carried in SI units
//! ([Length] in meters, [Speed] in m.s⁻¹) and converted on read only.

use crate::constants::{M_TO_FT, M_TO_KM, M_TO_NM, MPS_TO_FPM, MPS_TO_KMH, MPS_TO_KT, SPEED_OF_SOUND_M_S};
use crate::error::Error;

use serde::{Deserialize, Serialize};

/// Rounds to `precision` decimal digits, half away from zero.
fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10.0_f64.powi(precision as i32);
    (value * scale).round() / scale
}

/// Supported [Length] views.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
pub enum LengthUnit {
    /// Canonical SI unit
    #[default]
    Meters,
    Feet,
    NauticalMiles,
    Kilometers,
}

impl std::str::FromStr for LengthUnit {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meters" => Ok(Self::Meters),
            "ft" | "feet" => Ok(Self::Feet),
            "nm" | "nauticalmiles" => Ok(Self::NauticalMiles),
            "km" | "kilometers" => Ok(Self::Kilometers),
            _ => Err(Error::UnsupportedUnit(s.to_string())),
        }
    }
}

/// Supported [Speed] views.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
pub enum SpeedUnit {
    /// Canonical SI unit
    #[default]
    MetersPerSecond,
    Knots,
    FeetPerMinute,
    Mach,
    KilometersPerHour,
}

impl std::str::FromStr for SpeedUnit {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m/s" | "mps" => Ok(Self::MetersPerSecond),
            "kt" | "kts" | "knots" => Ok(Self::Knots),
            "fpm" | "ft/min" => Ok(Self::FeetPerMinute),
            "mach" => Ok(Self::Mach),
            "km/h" | "kmh" => Ok(Self::KilometersPerHour),
            _ => Err(Error::UnsupportedUnit(s.to_string())),
        }
    }
}

/// Distance carried in meters. The canonical value is frozen at
/// construction; every view is a pure derived conversion.
#[derive(Default, Debug, Clone, Copy, PartialEq, PartialOrd)]
#[derive(Serialize, Deserialize)]
pub struct Length {
    m: f64,
}

impl Length {
    /// Builds a new [Length] from meters.
    pub fn from_meters(m: f64) -> Self {
        Self { m }
    }

    /// Canonical value, in meters, unrounded.
    pub fn meters(&self) -> f64 {
        self.m
    }

    /// View in the requested [LengthUnit], rounded to `precision`
    /// decimal digits.
    pub fn to(&self, unit: LengthUnit, precision: u32) -> f64 {
        let converted = match unit {
            LengthUnit::Meters => self.m,
            LengthUnit::Feet => self.m * M_TO_FT,
            LengthUnit::NauticalMiles => self.m * M_TO_NM,
            LengthUnit::Kilometers => self.m * M_TO_KM,
        };
        round_to(converted, precision)
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} m", round_to(self.m, 4))
    }
}

/// Velocity carried in m.s⁻¹. Same canonical-value contract as [Length].
#[derive(Default, Debug, Clone, Copy, PartialEq, PartialOrd)]
#[derive(Serialize, Deserialize)]
pub struct Speed {
    mps: f64,
}

impl Speed {
    /// Builds a new [Speed] from m.s⁻¹.
    pub fn from_mps(mps: f64) -> Self {
        Self { mps }
    }

    /// Canonical value, in m.s⁻¹, unrounded.
    pub fn mps(&self) -> f64 {
        self.mps
    }

    /// View in the requested [SpeedUnit], rounded to `precision`
    /// decimal digits.
    pub fn to(&self, unit: SpeedUnit, precision: u32) -> f64 {
        let converted = match unit {
            SpeedUnit::MetersPerSecond => self.mps,
            SpeedUnit::Knots => self.mps * MPS_TO_KT,
            SpeedUnit::FeetPerMinute => self.mps * MPS_TO_FPM,
            SpeedUnit::Mach => self.mps / SPEED_OF_SOUND_M_S,
            SpeedUnit::KilometersPerHour => self.mps * MPS_TO_KMH,
        };
        round_to(converted, precision)
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} m/s", round_to(self.mps, 4))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn length_views() {
        let length = Length::from_meters(1852.0);
        assert_eq!(length.to(LengthUnit::Meters, 2), 1852.0);
        assert_eq!(length.to(LengthUnit::NauticalMiles, 2), 1.0);
        assert_eq!(length.to(LengthUnit::Kilometers, 3), 1.852);
        assert_eq!(length.to(LengthUnit::Feet, 1), 6076.1);
    }

    #[test]
    fn identity_round_trip() {
        for value in [0.0, 0.125, 1234.5678, -42.42] {
            let length = Length::from_meters(value);
            assert_eq!(length.to(LengthUnit::Meters, 4), round_to(value, 4));
        }
    }

    #[test]
    fn speed_views() {
        let speed = Speed::from_mps(100.0);
        assert_eq!(speed.to(SpeedUnit::Knots, 2), 194.38);
        assert_eq!(speed.to(SpeedUnit::FeetPerMinute, 0), 19685.0);
        assert_eq!(speed.to(SpeedUnit::KilometersPerHour, 1), 360.0);
        assert_eq!(speed.to(SpeedUnit::Mach, 2), 0.29);
    }

    #[test]
    fn unit_tags() {
        assert_eq!(LengthUnit::from_str("nm").unwrap(), LengthUnit::NauticalMiles);
        assert_eq!(SpeedUnit::from_str("KT").unwrap(), SpeedUnit::Knots);
        assert!(matches!(
            SpeedUnit::from_str("furlongs"),
            Err(Error::UnsupportedUnit(_))
        ));
    }
}
