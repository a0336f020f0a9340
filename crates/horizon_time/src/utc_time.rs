//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the calendar-facing representation. Conversion to
//! the Julian Day axis dispatches between the Julian and Gregorian
//! calendars at the 1582 Oct 15 reform.

use crate::julian::{gregorian_to_jd, jd_to_calendar, julian_to_jd};
use crate::moment::Moment;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// True if this instant falls on or after 1582 Oct 15, the first
    /// day of the Gregorian calendar.
    fn is_gregorian(&self) -> bool {
        (self.year, self.month, self.day) >= (1582, 10, 15)
    }

    /// Convert to a UT Julian Day.
    ///
    /// The fractional day is derived from hours/minutes/seconds; the
    /// instant dispatches to the Gregorian conversion on/after the 1582
    /// reform and to the Julian conversion before it.
    pub fn to_jd(&self) -> f64 {
        let day_frac = f64::from(self.day)
            + f64::from(self.hour) / 24.0
            + f64::from(self.minute) / 1440.0
            + self.second / 86_400.0;
        if self.is_gregorian() {
            gregorian_to_jd(self.year, self.month, day_frac)
        } else {
            julian_to_jd(self.year, self.month, day_frac)
        }
    }

    /// Convert to a [`Moment`], estimating ΔT.
    pub fn to_moment(&self) -> Moment {
        Moment::new(self.to_jd())
    }

    /// Convert a UT Julian Day back to a UTC calendar time.
    pub fn from_jd(jd: f64) -> Self {
        let cal = jd_to_calendar(jd);
        let day = cal.day.floor() as u32;
        let total_seconds = cal.day.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year: cal.year,
            month: cal.month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - f64::from(whole);
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
