//! Rise/transit/set entry points for the Moon.
//!
//! Like the solar entry points, but the standard altitude depends on
//! the day's horizontal parallax, so position assembly is fallible
//! (the lunar series can report a data-table error).

use horizon_bodies::moon as moon_body;
use horizon_frames::{Equatorial, Observer, apparent_0ut_seconds};
use horizon_time::Moment;

use crate::error::SolveError;
use crate::solver;
use crate::types::{EventTime, RiseSetResult, lunar_h0};

/// Lunar positions and distances at 0h of the previous, queried, and
/// next day.
fn position_window(day0: &Moment) -> Result<([Equatorial; 3], f64), SolveError> {
    let (prev, _) = moon_body::apparent_equatorial(&day0.add_days(-1.0))?;
    let (mid, mid_distance_km) = moon_body::apparent_equatorial(day0)?;
    let (next, _) = moon_body::apparent_equatorial(&day0.add_days(1.0))?;
    Ok(([prev, mid, next], mid_distance_km))
}

/// Approximate meridian transit of the Moon.
pub fn approx_transit(moment: &Moment, observer: &Observer) -> Result<EventTime, SolveError> {
    let day0 = moment.start_of_day();
    let th0 = apparent_0ut_seconds(&day0);
    let (eq, _) = moon_body::apparent_equatorial(&day0)?;
    Ok(solver::approx_transit(observer, th0, &eq))
}

/// Approximate moonrise, transit, and moonset for the day of `moment`.
pub fn approx_times(moment: &Moment, observer: &Observer) -> Result<RiseSetResult, SolveError> {
    let day0 = moment.start_of_day();
    let th0 = apparent_0ut_seconds(&day0);
    let (eq, distance_km) = moon_body::apparent_equatorial(&day0)?;
    let h0 = lunar_h0(moon_body::parallax(distance_km));
    Ok(solver::approx_times(observer, h0, th0, &eq))
}

/// Refined moonrise, transit, and moonset for the day of `moment`.
pub fn times(moment: &Moment, observer: &Observer) -> Result<RiseSetResult, SolveError> {
    let day0 = moment.start_of_day();
    let th0 = apparent_0ut_seconds(&day0);
    let (positions, distance_km) = position_window(&day0)?;
    let h0 = lunar_h0(moon_body::parallax(distance_km));
    solver::times(observer, moment.delta_t(), h0, th0, &positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moon_rises_at_mid_latitudes() {
        let m = Moment::new(2_451_623.5);
        let paris = Observer::from_geographic(48.85, 2.35, 35.0);
        assert!(approx_times(&m, &paris).unwrap().events().is_some());
    }

    #[test]
    fn approx_and_refined_agree_roughly() {
        // The single correction pass moves the events by minutes, not
        // hours (the Moon's ~13°/day motion dominates the correction).
        let m = Moment::new(2_460_310.5);
        let obs = Observer::from_geographic(48.85, 2.35, 35.0);
        let approx = approx_times(&m, &obs).unwrap();
        let refined = times(&m, &obs).unwrap();
        let (a, r) = match (approx.events(), refined.events()) {
            (Some(a), Some(r)) => (a, r),
            other => panic!("unexpected {other:?}"),
        };
        assert!((a.transit.raw_seconds() - r.transit.raw_seconds()).abs() < 3_600.0);
        assert!((a.rise.raw_seconds() - r.rise.raw_seconds()).abs() < 3_600.0);
        assert!((a.set.raw_seconds() - r.set.raw_seconds()).abs() < 3_600.0);
    }

    #[test]
    fn purity() {
        let m = Moment::new(2_460_310.5);
        let obs = Observer::from_geographic(48.85, 2.35, 35.0);
        assert_eq!(times(&m, &obs).unwrap(), times(&m, &obs).unwrap());
    }
}
