//! Constants for the solar position engine

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Calendar (leap years are not modeled)
/// Days in the modeled year
pub const DAYS_PER_YEAR: f64 = 365.0;
/// Day-of-year of the spring equinox used as the zero point of mean
/// ecliptic longitude
pub const EQUINOX_DAY: f64 = 80.0;
/// Minutes in a day
pub const MINUTES_PER_DAY: f64 = 1440.0;
/// Radians of mean solar motion to minutes of time (1440 / TAU)
pub const RAD2MIN: f64 = MINUTES_PER_DAY / TAU;

// Hour angle
/// Degrees of Earth rotation per hour
pub const DEG_PER_HOUR: f64 = 15.0;

// Default orbital parameters (present-day Earth)
/// Axial tilt in degrees
pub const DEFAULT_TILT_DEG: f64 = 23.44;
/// Orbital eccentricity
pub const DEFAULT_ECCENTRICITY: f64 = 0.0167;
/// Day-of-year of perihelion (early January)
pub const DEFAULT_PERIHELION_DAY: u32 = 3;

/// Threshold below which a trigonometric denominator is treated as
/// degenerate (sun at zenith/nadir, observer at a pole)
pub const DEGENERATE_EPS: f64 = 1e-9;
