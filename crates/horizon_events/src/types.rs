//! Result types and standard altitudes for rise/set computation.

use std::f64::consts::PI;

/// Mean refraction at the horizon used by the standard altitudes:
/// 0.5667° (34′).
pub const MEAN_REFRACTION_RAD: f64 = 0.5667 * PI / 180.0;

/// Standard altitude for stars and planets: −0.5667°.
pub const STELLAR_H0_RAD: f64 = -MEAN_REFRACTION_RAD;

/// Standard altitude for the Sun: −0.8333° (refraction plus the mean
/// solar semidiameter of 16′).
pub const SOLAR_H0_RAD: f64 = -0.8333 * PI / 180.0;

/// Standard altitude for the Moon at a given horizontal parallax.
///
/// `0.7275 π − 0.5667°`: the parallax term converts the geocentric
/// altitude to the topocentric one for the mean observer.
pub fn lunar_h0(parallax_rad: f64) -> f64 {
    0.7275 * parallax_rad - MEAN_REFRACTION_RAD
}

/// An event instant: seconds of the UT day in [0, 86400) plus the
/// offset of the calendar day it falls on relative to the queried day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventTime {
    /// Seconds of day, [0, 86400).
    pub seconds: f64,
    /// Calendar-day offset: −1, 0, or +1 for events spilling onto an
    /// adjacent day.
    pub day_offset: i32,
}

impl EventTime {
    /// Reduce raw (possibly negative or >1 day) seconds into a
    /// seconds-of-day / day-offset pair.
    pub(crate) fn from_raw_seconds(raw: f64) -> Self {
        let day = (raw / 86_400.0).floor();
        Self {
            seconds: raw - day * 86_400.0,
            day_offset: day as i32,
        }
    }

    /// Raw seconds relative to 0h of the queried day.
    pub fn raw_seconds(&self) -> f64 {
        f64::from(self.day_offset) * 86_400.0 + self.seconds
    }
}

/// The three events of one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayEvents {
    pub transit: EventTime,
    pub rise: EventTime,
    pub set: EventTime,
}

/// Outcome of a rise/set computation.
///
/// The circumpolar cases are ordinary results, not errors: a body that
/// never crosses the standard altitude that day simply has no rise/set
/// events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// The body crosses the standard altitude: transit, rise, and set.
    Events(DayEvents),
    /// The body stays below the standard altitude all day.
    NeverRises,
    /// The body stays above the standard altitude all day.
    NeverSets,
}

impl RiseSetResult {
    /// The events, if the body rises and sets.
    pub fn events(&self) -> Option<&DayEvents> {
        match self {
            Self::Events(ev) => Some(ev),
            _ => None,
        }
    }
}
