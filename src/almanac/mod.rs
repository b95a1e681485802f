//! Sunrise, sunset, day length, and related per-day sun events

use crate::constants::{DEG2RAD, DEG_PER_HOUR, RAD2DEG};
use crate::orbit::{self, OrbitalParameters};
use serde::{Deserialize, Serialize};

/// Sunrise/sunset summary for one day, in local mean solar hours.
///
/// The polar flags are explicit policy outcomes, not errors: callers
/// must branch on them before formatting sunrise/sunset displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    /// Hour of sunrise in [0, 12]
    pub sunrise: f64,
    /// Hour of sunset in [12, 24]
    pub sunset: f64,
    /// Hours of daylight in [0, 24]
    pub day_length: f64,
    /// True during polar night (sun below the horizon all day)
    pub never_rises: bool,
    /// True during midnight sun (sun above the horizon all day)
    pub never_sets: bool,
}

impl SunTimes {
    fn midnight_sun() -> Self {
        Self {
            sunrise: 0.0,
            sunset: 24.0,
            day_length: 24.0,
            never_rises: false,
            never_sets: true,
        }
    }

    fn polar_night() -> Self {
        Self {
            sunrise: 12.0,
            sunset: 12.0,
            day_length: 0.0,
            never_rises: true,
            never_sets: false,
        }
    }
}

/// Sunrise and sunset hours for a day-of-year at a latitude.
///
/// `cos(Ha) = -tan(latitude) * tan(declination)`; values outside [-1, 1]
/// flag midnight sun or polar night. Times are symmetric around solar
/// noon at hour 12.
pub fn sun_times(day: f64, latitude_deg: f64, params: &OrbitalParameters) -> SunTimes {
    let dec = orbit::declination(day, params);
    let cos_ha = -(latitude_deg * DEG2RAD).tan() * dec.tan();

    // The comparisons are written so that NaN (an exact pole with zero
    // declination, where the sun skims the horizon all day) falls through
    // to the midnight-sun branch.
    if cos_ha > 1.0 {
        SunTimes::polar_night()
    } else if !(cos_ha >= -1.0) {
        SunTimes::midnight_sun()
    } else {
        let half_day_hours = cos_ha.acos() * RAD2DEG / DEG_PER_HOUR;
        SunTimes {
            sunrise: 12.0 - half_day_hours,
            sunset: 12.0 + half_day_hours,
            day_length: 2.0 * half_day_hours,
            never_rises: false,
            never_sets: false,
        }
    }
}

/// Altitude of the sun at local solar noon, in degrees.
///
/// May be negative during polar night; callers interpret that as "no
/// noon event" rather than an error.
pub fn noon_altitude(day: f64, latitude_deg: f64, params: &OrbitalParameters) -> f64 {
    let dec_deg = orbit::declination(day, params) * RAD2DEG;
    90.0 - (latitude_deg - dec_deg).abs()
}

/// Days-of-year of maximum and minimum declination, found by direct scan.
///
/// Returns `(summer_solstice_day, winter_solstice_day)` in the northern
/// hemisphere sense.
pub fn solstice_days(params: &OrbitalParameters) -> (u32, u32) {
    let mut max_day = 1;
    let mut min_day = 1;
    let mut max_dec = f64::MIN;
    let mut min_dec = f64::MAX;
    for day in 1..=365 {
        let dec = orbit::declination(day as f64, params);
        if dec > max_dec {
            max_dec = dec;
            max_day = day;
        }
        if dec < min_dec {
            min_dec = dec;
            min_day = day;
        }
    }
    (max_day, min_day)
}
