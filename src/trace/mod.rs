//! Batch trace generation: analemma point sets and single-day sky paths
//!
//! Both generators are lazy, restartable iterators over pure function
//! evaluations. No state persists between invocations and no caching
//! happens here; a caller that wants to keep a trace around re-collects
//! it whenever latitude or orbital parameters change.

use crate::eot;
use crate::horizon::{self, HorizontalCoord};
use crate::orbit::{self, OrbitalParameters};
use serde::{Deserialize, Serialize};

/// Number of points in an analemma trace (one per day of the year)
pub const ANALEMMA_POINTS: usize = 365;
/// Number of 5-minute ticks in a day-path trace
pub const DAY_PATH_POINTS: usize = 288;
/// Hours advanced per day-path tick
const TICK_HOURS: f64 = 24.0 / DAY_PATH_POINTS as f64;

/// Which notion of clock time drives the sun's hour angle.
///
/// The engine takes clock hours in local mean solar time. Under
/// `Apparent` the hour angle is shifted by the day's Equation of Time,
/// so a trace answers "where is the sun when my clock reads H"; under
/// `MeanSolar` the shift is skipped and hour 12 always means the sun on
/// the meridian. One convention applies uniformly to both trace modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeConvention {
    /// Hour angle shifted by the Equation of Time (civil-clock-driven)
    #[default]
    Apparent,
    /// Hour angle taken directly from the clock hour
    MeanSolar,
}

/// One entry of a trace: the varying input (day-of-year or clock hour)
/// and the sun position it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TracePoint {
    /// Day-of-year (analemma mode) or clock hour (day-path mode)
    pub index: f64,
    pub position: HorizontalCoord,
}

/// Hour angle in hours from solar noon for a clock hour, honoring the
/// time convention. The Equation of Time converts mean to apparent
/// solar time in minutes, hence the division by 60.
pub(crate) fn hour_angle(
    day: f64,
    clock_hour: f64,
    params: &OrbitalParameters,
    convention: TimeConvention,
) -> f64 {
    let mut ha = clock_hour - 12.0;
    if convention == TimeConvention::Apparent {
        ha += eot::equation_of_time(day, params).total() / 60.0;
    }
    ha
}

/// Evaluate the sun position for one (day, clock hour) pair.
pub(crate) fn sun_position(
    day: f64,
    clock_hour: f64,
    latitude_deg: f64,
    params: &OrbitalParameters,
    convention: TimeConvention,
) -> HorizontalCoord {
    let dec = orbit::declination(day, params);
    let ha = hour_angle(day, clock_hour, params, convention);
    horizon::horizontal(ha, dec, latitude_deg)
}

/// Lazy iterator over the 365 points of an analemma: a fixed clock hour
/// evaluated for every day of the year, in day order.
#[derive(Debug, Clone)]
pub struct AnalemmaIter {
    params: OrbitalParameters,
    latitude_deg: f64,
    clock_hour: f64,
    convention: TimeConvention,
    day: u32,
}

impl AnalemmaIter {
    pub fn new(
        params: OrbitalParameters,
        latitude_deg: f64,
        clock_hour: f64,
        convention: TimeConvention,
    ) -> Self {
        log::debug!(
            "analemma trace: hour {} at latitude {} ({:?})",
            clock_hour,
            latitude_deg,
            convention
        );
        Self {
            params,
            latitude_deg,
            clock_hour,
            convention,
            day: 1,
        }
    }
}

impl Iterator for AnalemmaIter {
    type Item = TracePoint;

    fn next(&mut self) -> Option<TracePoint> {
        if self.day > ANALEMMA_POINTS as u32 {
            return None;
        }
        let day = self.day as f64;
        self.day += 1;
        Some(TracePoint {
            index: day,
            position: sun_position(
                day,
                self.clock_hour,
                self.latitude_deg,
                &self.params,
                self.convention,
            ),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = ANALEMMA_POINTS + 1 - self.day as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AnalemmaIter {}

/// Lazy iterator over one day's sky path: a fixed day evaluated at
/// 5-minute ticks across 24 hours, in time order.
#[derive(Debug, Clone)]
pub struct DayPathIter {
    params: OrbitalParameters,
    latitude_deg: f64,
    day: f64,
    convention: TimeConvention,
    tick: usize,
}

impl DayPathIter {
    pub fn new(
        params: OrbitalParameters,
        latitude_deg: f64,
        day: f64,
        convention: TimeConvention,
    ) -> Self {
        log::debug!(
            "day-path trace: day {} at latitude {} ({:?})",
            day,
            latitude_deg,
            convention
        );
        Self {
            params,
            latitude_deg,
            day,
            convention,
            tick: 0,
        }
    }
}

impl Iterator for DayPathIter {
    type Item = TracePoint;

    fn next(&mut self) -> Option<TracePoint> {
        if self.tick >= DAY_PATH_POINTS {
            return None;
        }
        let hour = self.tick as f64 * TICK_HOURS;
        self.tick += 1;
        Some(TracePoint {
            index: hour,
            position: sun_position(
                self.day,
                hour,
                self.latitude_deg,
                &self.params,
                self.convention,
            ),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = DAY_PATH_POINTS - self.tick;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DayPathIter {}
