//! Orbital model: day-of-year to anomalies, ecliptic longitude, and
//! solar declination
//!
//! These are closed-form low-order approximations to elliptical orbit
//! mechanics, accurate over the intended parameter ranges rather than an
//! exact Kepler inversion. All functions are pure mappings from numeric
//! inputs to numeric outputs; angles are radians internally and degrees
//! at the crate boundary.

use crate::constants::{
    DAYS_PER_YEAR, DEFAULT_ECCENTRICITY, DEFAULT_PERIHELION_DAY, DEFAULT_TILT_DEG, DEG2RAD,
    EQUINOX_DAY, TAU,
};
use crate::{HeliographError, Result};
use serde::{Deserialize, Serialize};

/// Adjustable parameters of the modeled orbit.
///
/// Immutable per computation; every engine call receives the current set
/// as input rather than reading shared mutable state. Construct through
/// [`OrbitalParameters::new`] to get range validation, or use `Default`
/// for present-day Earth values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalParameters {
    /// Axial tilt (obliquity) in degrees, valid 0..=90
    pub tilt_deg: f64,
    /// Orbital eccentricity, valid 0..1 (exclusive)
    pub eccentricity: f64,
    /// Day-of-year of perihelion, valid 1..=365
    pub perihelion_day: u32,
}

impl Default for OrbitalParameters {
    fn default() -> Self {
        Self {
            tilt_deg: DEFAULT_TILT_DEG,
            eccentricity: DEFAULT_ECCENTRICITY,
            perihelion_day: DEFAULT_PERIHELION_DAY,
        }
    }
}

impl OrbitalParameters {
    /// Create a validated parameter set.
    ///
    /// Out-of-physical-range values are rejected here rather than allowed
    /// to propagate NaN into a full-year trace.
    pub fn new(tilt_deg: f64, eccentricity: f64, perihelion_day: u32) -> Result<Self> {
        if !(0.0..=90.0).contains(&tilt_deg) || !tilt_deg.is_finite() {
            return Err(HeliographError::InvalidParameter(format!(
                "tilt must be within 0..=90 degrees, got {}",
                tilt_deg
            )));
        }
        if !(0.0..1.0).contains(&eccentricity) || !eccentricity.is_finite() {
            return Err(HeliographError::InvalidParameter(format!(
                "eccentricity must be within 0..1, got {}",
                eccentricity
            )));
        }
        if !(1..=365).contains(&perihelion_day) {
            return Err(HeliographError::InvalidParameter(format!(
                "perihelion day must be within 1..=365, got {}",
                perihelion_day
            )));
        }
        Ok(Self {
            tilt_deg,
            eccentricity,
            perihelion_day,
        })
    }

    /// Axial tilt in radians
    pub fn tilt_rad(&self) -> f64 {
        self.tilt_deg * DEG2RAD
    }
}

/// Mean anomaly in radians for a day-of-year, always in [0, 2*PI).
///
/// Uses a positive-result modulo so days earlier in the year than
/// perihelion do not yield negative angles. `day` may be fractional.
pub fn mean_anomaly(day: f64, perihelion_day: u32) -> f64 {
    let days_since_perihelion =
        (day - perihelion_day as f64 + DAYS_PER_YEAR).rem_euclid(DAYS_PER_YEAR);
    TAU * days_since_perihelion / DAYS_PER_YEAR
}

/// True anomaly from mean anomaly via the equation-of-center series.
///
/// Third-order in eccentricity; adequate for the small-to-moderate
/// eccentricities this model targets.
pub fn true_anomaly(mean: f64, eccentricity: f64) -> f64 {
    let e = eccentricity;
    mean + (2.0 * e - e.powi(3) / 4.0) * mean.sin()
        + 1.25 * e.powi(2) * (2.0 * mean).sin()
        + (13.0 / 12.0) * e.powi(3) * (3.0 * mean).sin()
}

/// Mean ecliptic longitude in radians, zero at the spring equinox day.
pub fn mean_longitude(day: f64) -> f64 {
    TAU * (day - EQUINOX_DAY) / DAYS_PER_YEAR
}

/// True ecliptic longitude of the Sun in radians: mean longitude plus
/// the equation of center.
pub fn solar_longitude(day: f64, params: &OrbitalParameters) -> f64 {
    let m = mean_anomaly(day, params.perihelion_day);
    let nu = true_anomaly(m, params.eccentricity);
    mean_longitude(day) + (nu - m)
}

/// Solar declination in radians for a day-of-year.
///
/// Bounded by the tilt: `|declination| <= tilt` for all days. A zero
/// tilt yields exactly zero for every day.
pub fn declination(day: f64, params: &OrbitalParameters) -> f64 {
    (params.tilt_rad().sin() * solar_longitude(day, params).sin()).asin()
}

/// Instantaneous orbital speed relative to the yearly mean.
///
/// Kepler's second law: speed varies inversely with the square of the
/// distance `a(1-e^2)/(1+e*cos(nu))`, so the normalized ratio reduces to
/// `1 + e*cos(nu)`. Equals 1.0 everywhere for a circular orbit.
pub fn orbital_speed(day: f64, params: &OrbitalParameters) -> f64 {
    let m = mean_anomaly(day, params.perihelion_day);
    let nu = true_anomaly(m, params.eccentricity);
    1.0 + params.eccentricity * nu.cos()
}
