//! Externally-clocked day/hour stepper for animation
//!
//! The engine itself is stateless; continuous day and hour advancement
//! for animated displays lives here as a small delta accumulator. The
//! caller feeds it wall-clock deltas and re-invokes the pure query
//! functions with the values it holds. It knows nothing about frames or
//! rendering.

use crate::constants::DAYS_PER_YEAR;

/// Fractional day-of-year and clock-hour state advanced by elapsed time.
///
/// Day wraps modulo 365, hour modulo 24; each rolls over independently
/// at its own configured rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayClock {
    /// Current day-of-year in [0, 365)
    pub day: f64,
    /// Current clock hour in [0, 24)
    pub hour: f64,
    /// Simulated days advanced per second of elapsed time
    pub days_per_second: f64,
    /// Simulated hours advanced per second of elapsed time
    pub hours_per_second: f64,
}

impl Default for DayClock {
    fn default() -> Self {
        Self {
            day: 1.0,
            hour: 12.0,
            days_per_second: 0.0,
            hours_per_second: 0.0,
        }
    }
}

impl DayClock {
    /// Start at a given day and hour with both rates at zero.
    pub fn at(day: f64, hour: f64) -> Self {
        Self {
            day: day.rem_euclid(DAYS_PER_YEAR),
            hour: hour.rem_euclid(24.0),
            ..Self::default()
        }
    }

    /// Advance both values by an elapsed interval in seconds.
    pub fn advance(&mut self, dt_seconds: f64) {
        self.day = (self.day + self.days_per_second * dt_seconds).rem_euclid(DAYS_PER_YEAR);
        self.hour = (self.hour + self.hours_per_second * dt_seconds).rem_euclid(24.0);
    }
}
