/// Mean Earth radius used by the haversine formula, in meters.
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_000.0;

/// Speed of sound at sea level (ISA), in m.s⁻¹. Mach conversion base.
pub const SPEED_OF_SOUND_M_S: f64 = 340.29;

/// 1 meter in feet
pub const M_TO_FT: f64 = 3.28084;

/// 1 meter in nautical miles
pub const M_TO_NM: f64 = 0.000539957;

/// 1 meter in kilometers
pub const M_TO_KM: f64 = 0.001;

/// 1 m.s⁻¹ in knots
pub const MPS_TO_KT: f64 = 1.94384449;

/// 1 m.s⁻¹ in feet per minute
pub const MPS_TO_FPM: f64 = 196.8503937;

/// 1 m.s⁻¹ in km.h⁻¹
pub const MPS_TO_KMH: f64 = 3.6;
