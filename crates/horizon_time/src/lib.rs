//! Time scales and calendar conversions for the engine.
//!
//! This crate provides:
//! - Julian Day ↔ calendar conversions (Julian and Gregorian)
//! - ΔT estimation (UT ↔ ephemeris time offset)
//! - `Moment`, the UT/ephemeris time pair used throughout the engine
//! - Mean sidereal time at Greenwich

pub mod deltat;
pub mod julian;
pub mod moment;
pub mod sidereal;
pub mod utc_time;

pub use deltat::estimate_delta_t;
pub use julian::{
    CalendarDate, GREGORIAN_REFORM_JD, J2000_JD, SECONDS_PER_DAY, gregorian_to_jd,
    is_gregorian_leap_year, jd_to_calendar, jd_to_jde, jde_to_jd, julian_century, julian_to_jd,
};
pub use moment::Moment;
pub use sidereal::{SIDEREAL_RATE, mean_0ut_seconds, mean_greenwich_seconds};
pub use utc_time::UtcTime;
