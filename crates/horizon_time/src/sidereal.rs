//! Mean sidereal time at Greenwich.
//!
//! IAU 1982 expression (Meeus ch. 12, formula 12.2): the polynomial
//! gives mean sidereal time at 0h UT; the elapsed UT day fraction is
//! scaled by the ratio of sidereal to solar time. The apparent variant
//! (mean + equation of the equinoxes) lives in the frames crate, next
//! to the nutation model it depends on.
//!
//! All returns are seconds of time in [0, 86400).

use horizon_math::pmod;

use crate::julian::{SECONDS_PER_DAY, julian_century};
use crate::moment::Moment;

/// Ratio of mean sidereal to mean solar rate.
pub const SIDEREAL_RATE: f64 = 1.002_737_909_35;

/// UT midnight preceding `jd`, and the day fraction elapsed since.
fn split_day(jd: f64) -> (f64, f64) {
    let midnight = (jd - 0.5).floor() + 0.5;
    (midnight, jd - midnight)
}

/// IAU 1982 polynomial: mean sidereal time at Greenwich for a 0h UT
/// Julian Day, in (unreduced) seconds of time.
fn mean_0ut_polynomial(jd_midnight: f64) -> f64 {
    let t = julian_century(jd_midnight);
    24_110.548_41 + t * (8_640_184.812_866 + t * (0.093_104 + t * -6.2e-6))
}

/// Mean sidereal time at Greenwich, seconds of time in [0, 86400).
pub fn mean_greenwich_seconds(moment: &Moment) -> f64 {
    let (midnight, frac) = split_day(moment.jd());
    pmod(
        mean_0ut_polynomial(midnight) + frac * SIDEREAL_RATE * SECONDS_PER_DAY,
        SECONDS_PER_DAY,
    )
}

/// Mean sidereal time at Greenwich at 0h UT of the moment's day,
/// seconds of time in [0, 86400).
pub fn mean_0ut_seconds(moment: &Moment) -> f64 {
    let (midnight, _) = split_day(moment.jd());
    pmod(mean_0ut_polynomial(midnight), SECONDS_PER_DAY)
}
