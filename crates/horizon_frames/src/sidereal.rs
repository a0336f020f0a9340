//! Apparent sidereal time: mean sidereal time corrected by the
//! equation of the equinoxes.
//!
//! The mean polynomial lives in `horizon_time::sidereal`; this module
//! adds the nutation correction and the Greenwich → local reduction.
//! Seconds-of-time and radian forms convert at 86400 s = 2π.

use std::f64::consts::{PI, TAU};

use horizon_math::pmod;
use horizon_time::{Moment, SECONDS_PER_DAY, mean_greenwich_seconds};

use crate::obliquity::nutation_in_ra;
use crate::observer::Observer;

/// Convert seconds of time to radians.
pub fn seconds_to_rad(seconds: f64) -> f64 {
    seconds * PI / 43_200.0
}

/// Convert radians to seconds of time.
pub fn rad_to_seconds(rad: f64) -> f64 {
    rad * 43_200.0 / PI
}

/// Apparent sidereal time at Greenwich, seconds of time in [0, 86400).
pub fn apparent_greenwich_seconds(moment: &Moment) -> f64 {
    let eq_of_equinoxes = rad_to_seconds(nutation_in_ra(moment));
    pmod(
        mean_greenwich_seconds(moment) + eq_of_equinoxes,
        SECONDS_PER_DAY,
    )
}

/// Apparent sidereal time at Greenwich at 0h UT of the moment's day,
/// seconds of time in [0, 86400). This is the Θ0 consumed by the
/// rise/transit/set solver.
pub fn apparent_0ut_seconds(moment: &Moment) -> f64 {
    apparent_greenwich_seconds(&moment.start_of_day())
}

/// Local apparent sidereal time, radians in [0, 2π).
///
/// Subtracts the observer's west-positive longitude from the Greenwich
/// value.
pub fn apparent_local_rad(moment: &Moment, observer: &Observer) -> f64 {
    pmod(
        seconds_to_rad(apparent_greenwich_seconds(moment)) - observer.longitude_rad,
        TAU,
    )
}
