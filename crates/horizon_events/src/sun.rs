//! Rise/transit/set entry points for the Sun.
//!
//! Assembles the solar standard altitude, the apparent sidereal time
//! at 0h UT, ΔT, and the ±1-day position window before calling the
//! core solver.

use horizon_bodies::sun as sun_body;
use horizon_frames::{Equatorial, Observer, apparent_0ut_seconds};
use horizon_time::Moment;

use crate::error::SolveError;
use crate::solver;
use crate::types::{EventTime, RiseSetResult, SOLAR_H0_RAD};

/// Approximate UT Julian Day of local solar noon for the day of
/// `moment`, from the observer's longitude alone.
pub fn approximate_local_noon_jd(moment: &Moment, observer: &Observer) -> f64 {
    moment.start_of_day().jd() + 0.5 + observer.longitude_rad.to_degrees() / 360.0
}

/// Solar positions at 0h of the previous, queried, and next day.
fn position_window(day0: &Moment) -> [Equatorial; 3] {
    [
        sun_body::apparent_equatorial(&day0.add_days(-1.0)),
        sun_body::apparent_equatorial(day0),
        sun_body::apparent_equatorial(&day0.add_days(1.0)),
    ]
}

/// Approximate meridian transit of the Sun.
pub fn approx_transit(moment: &Moment, observer: &Observer) -> EventTime {
    let day0 = moment.start_of_day();
    let th0 = apparent_0ut_seconds(&day0);
    solver::approx_transit(observer, th0, &sun_body::apparent_equatorial(&day0))
}

/// Approximate sunrise, transit, and sunset for the day of `moment`.
pub fn approx_times(moment: &Moment, observer: &Observer) -> RiseSetResult {
    let day0 = moment.start_of_day();
    let th0 = apparent_0ut_seconds(&day0);
    solver::approx_times(
        observer,
        SOLAR_H0_RAD,
        th0,
        &sun_body::apparent_equatorial(&day0),
    )
}

/// Refined sunrise, transit, and sunset for the day of `moment`.
pub fn times(moment: &Moment, observer: &Observer) -> Result<RiseSetResult, SolveError> {
    let day0 = moment.start_of_day();
    let th0 = apparent_0ut_seconds(&day0);
    solver::times(
        observer,
        moment.delta_t(),
        SOLAR_H0_RAD,
        th0,
        &position_window(&day0),
    )
}
