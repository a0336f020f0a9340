//! Golden-value integration tests for sunrise/sunset and lunar events.
//!
//! Almanac fixtures are asserted within the tolerances the truncated
//! theories support (about a minute for the Sun), plus self-consistency
//! checks: at a refined rise or set instant the body's computed
//! altitude must sit on the standard altitude.

use horizon_bodies::{moon as moon_body, sun as sun_body};
use horizon_events::{moon, sun, RiseSetResult, SOLAR_H0_RAD};
use horizon_frames::{
    Observer, apparent_greenwich_seconds, equatorial_to_horizontal, seconds_to_rad,
};
use horizon_time::{Moment, UtcTime};

fn hms(h: f64, m: f64, s: f64) -> f64 {
    h * 3600.0 + m * 60.0 + s
}

/// 2000 Mar 20 (equinox day) on the equator at the Greenwich meridian:
/// the Sun transits near 12:07:30 UT (equation of time ≈ −7.5 min) and
/// the day runs about 12h07m.
#[test]
fn equinox_sun_on_equator() {
    let m = UtcTime::new(2000, 3, 20, 0, 0, 0.0).to_moment();
    let observer = Observer::from_geographic(0.0, 0.0, 0.0);
    let ev = match sun::times(&m, &observer).unwrap() {
        RiseSetResult::Events(ev) => ev,
        other => panic!("unexpected {other:?}"),
    };
    assert!(
        (ev.transit.seconds - hms(12.0, 7.0, 30.0)).abs() < 180.0,
        "transit {}",
        ev.transit.seconds
    );
    assert!(
        (ev.rise.seconds - hms(6.0, 4.0, 0.0)).abs() < 180.0,
        "rise {}",
        ev.rise.seconds
    );
    assert!(
        (ev.set.seconds - hms(18.0, 11.0, 0.0)).abs() < 180.0,
        "set {}",
        ev.set.seconds
    );
}

/// Paris on the 2000 June solstice: sunrise ≈ 03:47 UT, sunset ≈
/// 19:58 UT (civil almanac values).
#[test]
fn solstice_sun_at_paris() {
    let m = UtcTime::new(2000, 6, 21, 0, 0, 0.0).to_moment();
    let paris = Observer::from_geographic(48.85, 2.35, 35.0);
    let ev = match sun::times(&m, &paris).unwrap() {
        RiseSetResult::Events(ev) => ev,
        other => panic!("unexpected {other:?}"),
    };
    assert!(
        (ev.rise.seconds - hms(3.0, 47.0, 0.0)).abs() < 240.0,
        "rise {}",
        ev.rise.seconds
    );
    assert!(
        (ev.set.seconds - hms(19.0, 58.0, 0.0)).abs() < 240.0,
        "set {}",
        ev.set.seconds
    );
    // Day length just over 16 hours at 48.85°N.
    let day_len = ev.set.raw_seconds() - ev.rise.raw_seconds();
    assert!(
        (day_len - 16.1 * 3600.0).abs() < 900.0,
        "day length {day_len}"
    );
}

/// At the refined sunrise instant the Sun's geocentric altitude must
/// sit on the solar standard altitude (−0.8333°).
#[test]
fn sun_altitude_at_refined_rise() {
    let paris = Observer::from_geographic(48.85, 2.35, 35.0);
    for &jd in &[2_451_623.5, 2_451_716.5, 2_451_810.5, 2_460_310.5] {
        let m = Moment::new(jd);
        let day0 = m.start_of_day();
        let ev = match sun::times(&m, &paris).unwrap() {
            RiseSetResult::Events(ev) => ev,
            other => panic!("unexpected {other:?}"),
        };
        for &event_seconds in &[ev.rise.seconds, ev.set.seconds] {
            let at = Moment::with_delta_t(day0.jd() + event_seconds / 86_400.0, m.delta_t());
            let eq = sun_body::apparent_equatorial(&at);
            let theta = seconds_to_rad(apparent_greenwich_seconds(&at));
            let hz = equatorial_to_horizontal(&eq, &paris, theta);
            let err_deg = (hz.alt_rad - SOLAR_H0_RAD).to_degrees().abs();
            assert!(
                err_deg < 0.1,
                "altitude off by {err_deg}° at jd {jd}, t = {event_seconds}"
            );
        }
    }
}

/// At the refined lunar transit the hour angle vanishes; at rise/set
/// the altitude matches the day's lunar standard altitude.
#[test]
fn moon_events_self_consistent() {
    let paris = Observer::from_geographic(48.85, 2.35, 35.0);
    for &jd in &[2_451_623.5, 2_460_310.5, 2_460_700.5] {
        let m = Moment::new(jd);
        let day0 = m.start_of_day();
        let ev = match moon::times(&m, &paris).unwrap() {
            RiseSetResult::Events(ev) => ev,
            _ => continue, // lunar circumpolar days do occur
        };

        // Transit: local hour angle within a fraction of a degree.
        let at = Moment::with_delta_t(day0.jd() + ev.transit.seconds / 86_400.0, m.delta_t());
        let (eq, distance_km) = moon_body::apparent_equatorial(&at).unwrap();
        let theta = seconds_to_rad(apparent_greenwich_seconds(&at));
        let hour_angle = horizon_math::pmod(
            theta - paris.longitude_rad - eq.ra_rad + std::f64::consts::PI,
            std::f64::consts::TAU,
        ) - std::f64::consts::PI;
        assert!(
            hour_angle.to_degrees().abs() < 0.5,
            "transit hour angle {}° at jd {jd}",
            hour_angle.to_degrees()
        );

        // Rise: geocentric altitude on the lunar standard altitude.
        let h0 = horizon_events::lunar_h0(moon_body::parallax(distance_km));
        let at = Moment::with_delta_t(day0.jd() + ev.rise.seconds / 86_400.0, m.delta_t());
        let (eq, _) = moon_body::apparent_equatorial(&at).unwrap();
        let theta = seconds_to_rad(apparent_greenwich_seconds(&at));
        let hz = equatorial_to_horizontal(&eq, &paris, theta);
        assert!(
            (hz.alt_rad - h0).to_degrees().abs() < 0.6,
            "rise altitude off by {}° at jd {jd}",
            (hz.alt_rad - h0).to_degrees()
        );
    }
}

/// The Sun never rises in midwinter and never sets in midsummer at
/// 78°N, through the full refined pipeline.
#[test]
fn refined_polar_cases() {
    let svalbard = Observer::from_geographic(78.22, 15.65, 0.0);
    let winter = UtcTime::new(2000, 12, 22, 12, 0, 0.0).to_moment();
    let summer = UtcTime::new(2000, 6, 21, 12, 0, 0.0).to_moment();
    assert_eq!(
        sun::times(&winter, &svalbard).unwrap(),
        RiseSetResult::NeverRises
    );
    assert_eq!(
        sun::times(&summer, &svalbard).unwrap(),
        RiseSetResult::NeverSets
    );
}

/// Rise/set results are pure functions of their inputs.
#[test]
fn results_are_reproducible() {
    let m = UtcTime::new(2024, 7, 4, 6, 0, 0.0).to_moment();
    let obs = Observer::from_geographic(40.71, -74.0, 10.0);
    assert_eq!(
        sun::times(&m, &obs).unwrap(),
        sun::times(&m, &obs).unwrap()
    );
    assert_eq!(
        moon::times(&m, &obs).unwrap(),
        moon::times(&m, &obs).unwrap()
    );
}
