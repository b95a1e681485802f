//! Heliograph: solar position and equation-of-time calculations
//!
//! This crate computes the apparent position of the Sun as seen from a
//! point on Earth's surface, as a function of day-of-year, clock time,
//! geographic latitude, and three adjustable orbital parameters (axial
//! tilt, eccentricity, day of perihelion). It provides solar declination,
//! the Equation of Time split into its eccentricity and obliquity
//! components, altitude/azimuth sun positions, sunrise/sunset and day
//! length with polar-day/night flags, and batch analemma and day-path
//! traces for rendering.
//!
//! The model is a low-order analytic approximation, not an ephemeris:
//! leap years, timezones, refraction, and rendering are all out of scope.
//! Every function is a deterministic, side-effect-free mapping from
//! numeric inputs to numeric outputs, so the engine is freely callable
//! from concurrent contexts.
//!
//! Clock hours are local **mean solar time**. Queries taking a clock
//! hour honor a [`TimeConvention`]: the default `Apparent` convention
//! shifts the hour angle by the day's Equation of Time, applied
//! uniformly across single-instant queries and both trace modes.

use thiserror::Error;

pub mod almanac;
pub mod constants;
pub mod eot;
pub mod horizon;
pub mod orbit;
pub mod stepper;
pub mod trace;

// Re-export commonly used types
pub use almanac::SunTimes;
pub use eot::{EotComponents, EotMask};
pub use horizon::HorizontalCoord;
pub use orbit::OrbitalParameters;
pub use stepper::DayClock;
pub use trace::{AnalemmaIter, DayPathIter, TimeConvention, TracePoint};

/// Main error type for the heliograph library
#[derive(Debug, Error)]
pub enum HeliographError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for heliograph operations
pub type Result<T> = std::result::Result<T, HeliographError>;

/// The engine's configuration surface: a validated, immutable pairing of
/// orbital parameters and observer latitude.
///
/// All query methods are pure; changing parameters means constructing a
/// new engine (and regenerating any traces a caller kept around). All
/// angles crossing this boundary are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEngine {
    params: OrbitalParameters,
    latitude_deg: f64,
}

impl SolarEngine {
    /// Create an engine from validated parameters and a latitude in
    /// [-90, 90] degrees.
    pub fn new(params: OrbitalParameters, latitude_deg: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude_deg) || !latitude_deg.is_finite() {
            return Err(HeliographError::InvalidParameter(format!(
                "latitude must be within -90..=90 degrees, got {}",
                latitude_deg
            )));
        }
        Ok(Self {
            params,
            latitude_deg,
        })
    }

    /// Engine with present-day Earth parameters at the given latitude.
    pub fn with_defaults(latitude_deg: f64) -> Result<Self> {
        Self::new(OrbitalParameters::default(), latitude_deg)
    }

    /// Current orbital parameters
    pub fn params(&self) -> &OrbitalParameters {
        &self.params
    }

    /// Observer latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.latitude_deg
    }

    /// Solar declination in degrees for a day-of-year
    pub fn declination(&self, day: f64) -> f64 {
        orbit::declination(day, &self.params) * constants::RAD2DEG
    }

    /// Equation of Time components in minutes for a day-of-year
    pub fn equation_of_time(&self, day: f64) -> EotComponents {
        eot::equation_of_time(day, &self.params)
    }

    /// Equation of Time with per-component masking
    pub fn equation_of_time_masked(&self, day: f64, mask: EotMask) -> EotComponents {
        eot::equation_of_time_masked(day, &self.params, mask)
    }

    /// Sun position for a day and clock hour under the default
    /// `Apparent` convention
    pub fn sun_position(&self, day: f64, hour: f64) -> HorizontalCoord {
        self.sun_position_with(day, hour, TimeConvention::default())
    }

    /// Sun position under an explicit time convention
    pub fn sun_position_with(
        &self,
        day: f64,
        hour: f64,
        convention: TimeConvention,
    ) -> HorizontalCoord {
        trace::sun_position(day, hour, self.latitude_deg, &self.params, convention)
    }

    /// Sunrise, sunset, and day length for a day-of-year
    pub fn sun_times(&self, day: f64) -> SunTimes {
        almanac::sun_times(day, self.latitude_deg, &self.params)
    }

    /// Altitude of the noon sun in degrees; negative means the sun stays
    /// below the horizon at noon
    pub fn noon_altitude(&self, day: f64) -> f64 {
        almanac::noon_altitude(day, self.latitude_deg, &self.params)
    }

    /// Orbital speed relative to the yearly mean for a day-of-year
    pub fn orbital_speed(&self, day: f64) -> f64 {
        orbit::orbital_speed(day, &self.params)
    }

    /// Analemma trace: the given clock hour evaluated over all 365 days,
    /// under the default `Apparent` convention
    pub fn generate_analemma(&self, hour: f64) -> AnalemmaIter {
        self.generate_analemma_with(hour, TimeConvention::default())
    }

    /// Analemma trace under an explicit time convention
    pub fn generate_analemma_with(&self, hour: f64, convention: TimeConvention) -> AnalemmaIter {
        AnalemmaIter::new(self.params, self.latitude_deg, hour, convention)
    }

    /// Day-path trace: the given day evaluated at 5-minute ticks across
    /// 24 hours, under the default `Apparent` convention
    pub fn generate_day_path(&self, day: f64) -> DayPathIter {
        self.generate_day_path_with(day, TimeConvention::default())
    }

    /// Day-path trace under an explicit time convention
    pub fn generate_day_path_with(&self, day: f64, convention: TimeConvention) -> DayPathIter {
        DayPathIter::new(self.params, self.latitude_deg, day, convention)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_engine_rejects_bad_latitude() {
        assert!(SolarEngine::with_defaults(91.0).is_err());
        assert!(SolarEngine::with_defaults(-90.5).is_err());
        assert!(SolarEngine::with_defaults(f64::NAN).is_err());
        assert!(SolarEngine::with_defaults(90.0).is_ok());
    }

    #[test]
    fn test_declination_in_degrees_at_boundary() {
        let engine = SolarEngine::with_defaults(45.0).unwrap();
        let dec = engine.declination(172.0);
        assert!(dec > 23.0 && dec <= 23.44, "declination {}", dec);
    }

    #[test]
    fn test_queries_are_deterministic() {
        let engine = SolarEngine::with_defaults(52.0).unwrap();
        let a = engine.sun_position(120.0, 15.5);
        let b = engine.sun_position(120.0, 15.5);
        assert_abs_diff_eq!(a.altitude_deg, b.altitude_deg);
        assert_abs_diff_eq!(a.azimuth_deg, b.azimuth_deg);
    }
}
