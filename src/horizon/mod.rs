//! Equatorial to horizontal coordinate transform
//!
//! A stateless geometric solver mapping (hour angle, declination,
//! latitude) to the observer's altitude/azimuth frame. This is the single
//! canonical transform used by every consumer of the engine.

use crate::constants::{DEGENERATE_EPS, DEG2RAD, DEG_PER_HOUR, RAD2DEG};
use serde::{Deserialize, Serialize};

/// Position of the Sun in the observer's sky, in degrees.
///
/// Altitude: 0 at the horizon, 90 at the zenith. Azimuth: measured from
/// North, increasing through East, normalized to [0, 360) — the noon sun
/// at northern mid-latitudes sits due south at 180.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoord {
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
}

/// Transform an hour angle (hours from local solar noon), declination
/// (radians), and latitude (degrees) into horizontal coordinates.
///
/// Azimuth is evaluated in a division-free `atan2` form, so the
/// zenith/nadir and polar degeneracies are detected directly rather than
/// papered over with an additive epsilon. When the direction is
/// genuinely undefined (sun exactly at zenith or nadir) the azimuth is
/// 0.0 by definition; the result is never NaN.
pub fn horizontal(hour_angle_hours: f64, declination_rad: f64, latitude_deg: f64) -> HorizontalCoord {
    let h = hour_angle_hours * DEG_PER_HOUR * DEG2RAD;
    let phi = latitude_deg * DEG2RAD;
    let (sin_dec, cos_dec) = declination_rad.sin_cos();
    let (sin_lat, cos_lat) = phi.sin_cos();
    let cos_h = h.cos();

    let sin_alt = (sin_dec * sin_lat + cos_dec * cos_lat * cos_h).clamp(-1.0, 1.0);
    let altitude_deg = sin_alt.asin() * RAD2DEG;

    // sin(az)*cos(alt) and cos(az)*cos(alt): the shared non-negative
    // cos(alt) factor (and the cos(lat) that cancels out of the cos(az)
    // quotient) leave the atan2 quadrant unchanged.
    let az_y = -h.sin() * cos_dec;
    let az_x = sin_dec * cos_lat - cos_dec * sin_lat * cos_h;

    let azimuth_deg = if az_y.abs() < DEGENERATE_EPS && az_x.abs() < DEGENERATE_EPS {
        0.0
    } else {
        // rem_euclid of a tiny negative angle can round up to 360.0
        // exactly; fold that back to keep azimuth in [0, 360)
        let az = (az_y.atan2(az_x) * RAD2DEG).rem_euclid(360.0);
        if az >= 360.0 {
            0.0
        } else {
            az
        }
    };

    HorizontalCoord {
        altitude_deg,
        azimuth_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn test_noon_sun_due_south_northern_latitude() {
        // Declination 0, latitude 45N, local noon: altitude 45, azimuth 180
        let pos = horizontal(0.0, 0.0, 45.0);
        assert_abs_diff_eq!(pos.altitude_deg, 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pos.azimuth_deg, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_noon_sun_due_north_southern_latitude() {
        let pos = horizontal(0.0, 0.0, -45.0);
        assert_abs_diff_eq!(pos.altitude_deg, 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pos.azimuth_deg, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_morning_sun_in_the_east() {
        // Three hours before noon at 45N the sun stands east of the meridian
        let pos = horizontal(-3.0, 0.0, 45.0);
        assert!(pos.azimuth_deg > 90.0 && pos.azimuth_deg < 180.0,
            "azimuth {}", pos.azimuth_deg);

        // Mirror image three hours after noon
        let evening = horizontal(3.0, 0.0, 45.0);
        assert_abs_diff_eq!(
            evening.azimuth_deg,
            360.0 - pos.azimuth_deg,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(evening.altitude_deg, pos.altitude_deg, epsilon = 1e-9);
    }

    #[test]
    fn test_equator_equinox_sunrise_due_east() {
        // Hour angle -6h, declination 0, equator: sun on the horizon due east
        let pos = horizontal(-6.0, 0.0, 0.0);
        assert_abs_diff_eq!(pos.altitude_deg, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pos.azimuth_deg, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zenith_defined_azimuth() {
        // Declination equal to latitude at noon puts the sun exactly at
        // the zenith; azimuth is undefined there and reads 0 by policy.
        let pos = horizontal(0.0, 0.0, 0.0);
        assert_abs_diff_eq!(pos.altitude_deg, 90.0, epsilon = 1e-9);
        assert!(pos.azimuth_deg.is_finite());
        assert_abs_diff_eq!(pos.azimuth_deg, 0.0);
    }

    #[rstest]
    #[case(90.0)]
    #[case(-90.0)]
    fn test_poles_never_nan(#[case] latitude: f64) {
        for hour in 0..24 {
            for dec_deg in [-23.44, 0.0, 23.44] {
                let pos = horizontal(
                    hour as f64 - 12.0,
                    dec_deg * DEG2RAD,
                    latitude,
                );
                assert!(pos.altitude_deg.is_finite());
                assert!(pos.azimuth_deg.is_finite());
                // At the pole the altitude equals the declination
                assert_abs_diff_eq!(
                    pos.altitude_deg,
                    dec_deg * latitude.signum(),
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_altitude_clamped() {
        // Sweep a grid; altitude must stay within [-90, 90] and azimuth
        // within [0, 360) with no NaN anywhere.
        for lat in (-90..=90).step_by(15) {
            for dec_deg in (-89..=89).step_by(11) {
                for h in 0..24 {
                    let pos = horizontal(
                        h as f64 - 12.0,
                        dec_deg as f64 * DEG2RAD,
                        lat as f64,
                    );
                    assert!((-90.0..=90.0).contains(&pos.altitude_deg));
                    assert!((0.0..360.0).contains(&pos.azimuth_deg));
                }
            }
        }
    }
}
