//! Equation of Time: the difference between apparent (sundial) and mean
//! (clock) solar time, in minutes
//!
//! The equation decomposes into two physically independent effects: the
//! eccentricity of the orbit (non-uniform orbital speed) and the
//! obliquity of the ecliptic (projection of uniform ecliptic motion onto
//! the equator). Each component is retrievable on its own for
//! component-wise plotting, and each can be masked to zero for didactic
//! display.

use crate::constants::RAD2MIN;
use crate::orbit::{self, OrbitalParameters};
use serde::{Deserialize, Serialize};

/// The two named components of the Equation of Time, in minutes.
///
/// Positive values mean the sundial runs ahead of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EotComponents {
    /// Contribution of orbital eccentricity, independent of tilt
    pub eccentricity_min: f64,
    /// Contribution of axial tilt, independent of eccentricity
    pub obliquity_min: f64,
}

impl EotComponents {
    /// Total Equation of Time in minutes
    pub fn total(&self) -> f64 {
        self.eccentricity_min + self.obliquity_min
    }
}

/// Per-component on/off flags. A masked component reads as exactly zero;
/// with both off the total is a well-defined 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EotMask {
    pub eccentricity: bool,
    pub obliquity: bool,
}

impl Default for EotMask {
    fn default() -> Self {
        Self {
            eccentricity: true,
            obliquity: true,
        }
    }
}

/// Equation of Time for a day-of-year with both components enabled.
pub fn equation_of_time(day: f64, params: &OrbitalParameters) -> EotComponents {
    equation_of_time_masked(day, params, EotMask::default())
}

/// Equation of Time with independent per-component masking.
pub fn equation_of_time_masked(
    day: f64,
    params: &OrbitalParameters,
    mask: EotMask,
) -> EotComponents {
    let eccentricity_min = if mask.eccentricity {
        eccentricity_term(day, params) * RAD2MIN
    } else {
        0.0
    };
    let obliquity_min = if mask.obliquity {
        obliquity_term(day, params) * RAD2MIN
    } else {
        0.0
    };
    EotComponents {
        eccentricity_min,
        obliquity_min,
    }
}

/// Eccentricity effect in radians of mean solar motion.
fn eccentricity_term(day: f64, params: &OrbitalParameters) -> f64 {
    let e = params.eccentricity;
    let m = orbit::mean_anomaly(day, params.perihelion_day);
    -2.0 * e * m.sin() - 1.25 * e * e * (2.0 * m).sin()
}

/// Obliquity effect in radians of mean solar motion, driven by the mean
/// ecliptic longitude.
fn obliquity_term(day: f64, params: &OrbitalParameters) -> f64 {
    let y = (params.tilt_rad() / 2.0).tan().powi(2);
    let l = orbit::mean_longitude(day);
    y * (2.0 * l).sin() - 0.5 * y * y * (4.0 * l).sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_tilt_zero_obliquity_component() {
        let params = OrbitalParameters::new(0.0, 0.0167, 3).unwrap();
        for day in 1..=365 {
            let eot = equation_of_time(day as f64, &params);
            assert_abs_diff_eq!(eot.obliquity_min, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_eccentricity_zero_eccentricity_component() {
        let params = OrbitalParameters::new(23.44, 0.0, 3).unwrap();
        for day in 1..=365 {
            let eot = equation_of_time(day as f64, &params);
            assert_abs_diff_eq!(eot.eccentricity_min, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_earth_like_magnitude() {
        // For present-day Earth the total stays within roughly +/- 17
        // minutes, peaking in early November and mid February.
        let params = OrbitalParameters::default();
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for day in 1..=365 {
            let total = equation_of_time(day as f64, &params).total();
            assert!(total.is_finite());
            min = min.min(total);
            max = max.max(total);
        }
        assert!(max > 10.0 && max < 20.0, "max EOT {}", max);
        assert!(min < -10.0 && min > -20.0, "min EOT {}", min);
    }

    #[test]
    fn test_finite_over_parameter_ranges() {
        for tilt in [0.0, 30.0, 60.0, 89.9] {
            for ecc in [0.0, 0.1, 0.5, 0.9] {
                let params = OrbitalParameters::new(tilt, ecc, 3).unwrap();
                for day in (1..=365).step_by(7) {
                    let eot = equation_of_time(day as f64, &params);
                    assert!(eot.total().is_finite(), "tilt {} ecc {}", tilt, ecc);
                }
            }
        }
    }

    #[test]
    fn test_masking() {
        let params = OrbitalParameters::default();
        let day = 40.0;
        let full = equation_of_time(day, &params);

        let ecc_only = equation_of_time_masked(
            day,
            &params,
            EotMask {
                eccentricity: true,
                obliquity: false,
            },
        );
        assert_abs_diff_eq!(ecc_only.eccentricity_min, full.eccentricity_min);
        assert_abs_diff_eq!(ecc_only.obliquity_min, 0.0);

        let both_off = equation_of_time_masked(
            day,
            &params,
            EotMask {
                eccentricity: false,
                obliquity: false,
            },
        );
        assert_abs_diff_eq!(both_off.total(), 0.0);
    }

    #[test]
    fn test_components_sum_to_total() {
        let params = OrbitalParameters::default();
        for day in (1..=365).step_by(13) {
            let eot = equation_of_time(day as f64, &params);
            assert_abs_diff_eq!(
                eot.total(),
                eot.eccentricity_min + eot.obliquity_min,
                epsilon = 1e-12
            );
        }
    }
}
