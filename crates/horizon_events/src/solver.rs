//! Core rise/transit/set solver (Meeus ch. 15).
//!
//! Two precision levels: `approx_times` places the events from the
//! day's 0h position alone; `times` refines them against a three-day
//! position window with a single interpolation-based correction pass
//! per event (the pass matches the textbook's stated precision; it is
//! not an open-ended convergence loop).
//!
//! All times are seconds of the UT day; sidereal inputs are seconds of
//! time. The observer longitude is west-positive throughout.

use std::f64::consts::{PI, TAU};

use horizon_frames::{Equatorial, Observer};
use horizon_math::{Len3, pmod};

use crate::error::SolveError;
use crate::types::{DayEvents, EventTime, RiseSetResult};

/// Seconds of time per radian of hour angle (86400 / 2π).
const SEC_PER_RAD: f64 = 43_200.0 / PI;

/// Sidereal advance per UT second (360.985647° per day / 360°).
const SIDEREAL_PER_SOLAR: f64 = 360.985_647 / 360.0;

/// Raw transit offset in seconds: `(α + L)·43200/π − Θ0` (15.2).
fn transit_raw_seconds(observer: &Observer, th0_seconds: f64, eq: &Equatorial) -> f64 {
    (eq.ra_rad + observer.longitude_rad) * SEC_PER_RAD - th0_seconds
}

/// Approximate meridian transit.
///
/// `th0_seconds` is the apparent sidereal time at Greenwich at 0h UT
/// of the queried day. The transit exists regardless of whether the
/// body rises, so this entry has no circumpolar case.
pub fn approx_transit(observer: &Observer, th0_seconds: f64, eq: &Equatorial) -> EventTime {
    EventTime::from_raw_seconds(transit_raw_seconds(observer, th0_seconds, eq))
}

/// `cos H0` of the circumpolar test (15.1), unclamped.
fn cos_h0(observer: &Observer, h0_rad: f64, dec_rad: f64) -> f64 {
    (h0_rad.sin() - observer.latitude_rad.sin() * dec_rad.sin())
        / (observer.latitude_rad.cos() * dec_rad.cos())
}

/// Approximate transit, rise, and set from the day's 0h position.
///
/// Returns the circumpolar variants when the body never crosses the
/// standard altitude `h0_rad`; a `cos H0` of exactly ±1 yields the
/// grazing (zero- or full-day-arc) events rather than a no-event
/// result.
pub fn approx_times(
    observer: &Observer,
    h0_rad: f64,
    th0_seconds: f64,
    eq: &Equatorial,
) -> RiseSetResult {
    let c = cos_h0(observer, h0_rad, eq.dec_rad);
    if c > 1.0 {
        return RiseSetResult::NeverRises;
    }
    if c < -1.0 {
        return RiseSetResult::NeverSets;
    }

    // Half the diurnal arc above h0, in seconds of time.
    let half_arc = c.acos() * SEC_PER_RAD;

    let raw_transit = transit_raw_seconds(observer, th0_seconds, eq);
    RiseSetResult::Events(DayEvents {
        transit: EventTime::from_raw_seconds(raw_transit),
        rise: EventTime::from_raw_seconds(raw_transit - half_arc),
        set: EventTime::from_raw_seconds(raw_transit + half_arc),
    })
}

/// Bring three right-ascension samples onto a continuous branch so the
/// quadratic interpolation never sees a 0/2π jump.
fn unwrap_ra(mut y: [f64; 3]) -> [f64; 3] {
    for i in 1..3 {
        while y[i] - y[i - 1] > PI {
            y[i] -= TAU;
        }
        while y[i] - y[i - 1] < -PI {
            y[i] += TAU;
        }
    }
    y
}

/// Apparent sidereal time (seconds) at `m` seconds past 0h UT.
fn sidereal_at(th0_seconds: f64, m: f64) -> f64 {
    pmod(th0_seconds + m * SIDEREAL_PER_SOLAR, 86_400.0)
}

/// Local hour angle in seconds of time at `m` seconds past 0h UT,
/// normalized into [−43200, 43200).
fn hour_angle_seconds(
    observer: &Observer,
    th0_seconds: f64,
    delta_t: f64,
    ra: &Len3,
    m: f64,
) -> f64 {
    let theta = sidereal_at(th0_seconds, m);
    let alpha = ra.interpolate_x(m + delta_t) * SEC_PER_RAD;
    let l = observer.longitude_rad * SEC_PER_RAD;
    pmod(theta - l - alpha + 43_200.0, 86_400.0) - 43_200.0
}

/// Re-reduce a refined seconds-of-day value, carrying the approximate
/// event's day offset and accounting for a correction that crosses
/// midnight.
fn reduced(approx: EventTime, refined_seconds: f64) -> EventTime {
    let wrapped = EventTime::from_raw_seconds(refined_seconds);
    EventTime {
        seconds: wrapped.seconds,
        day_offset: approx.day_offset + wrapped.day_offset,
    }
}

/// One altitude-residual correction for a rise or set instant (15.x):
/// `Δm = (h − h0) / (2π cos δ cos φ sin H)`.
///
/// The correction is evaluated at the day-reduced instant, where the
/// interpolation window is valid; the day offset passes through.
fn refine_crossing(
    observer: &Observer,
    h0_rad: f64,
    th0_seconds: f64,
    delta_t: f64,
    ra: &Len3,
    dec: &Len3,
    start: EventTime,
) -> EventTime {
    let m = start.seconds;
    let h_rad = hour_angle_seconds(observer, th0_seconds, delta_t, ra, m) / SEC_PER_RAD;
    let dec_i = dec.interpolate_x(m + delta_t);

    let (sin_phi, cos_phi) = observer.latitude_rad.sin_cos();
    let (sin_dec, cos_dec) = dec_i.sin_cos();
    let alt = (sin_phi * sin_dec + cos_phi * cos_dec * h_rad.cos()).asin();

    let dm = (alt - h0_rad) / (TAU * cos_dec * cos_phi * h_rad.sin()) * 86_400.0;
    reduced(start, m + dm)
}

/// Refined transit, rise, and set from a three-day position window.
///
/// `positions` holds the apparent equatorial position at 0h of the
/// previous day, the queried day, and the next day. `delta_t` converts
/// the UT event guesses onto the ephemeris axis the positions were
/// sampled on. The transit gets one Newton-like hour-angle correction;
/// rise and set get one altitude-residual pass each.
pub fn times(
    observer: &Observer,
    delta_t: f64,
    h0_rad: f64,
    th0_seconds: f64,
    positions: &[Equatorial; 3],
) -> Result<RiseSetResult, SolveError> {
    let approx = match approx_times(observer, h0_rad, th0_seconds, &positions[1]) {
        RiseSetResult::Events(ev) => ev,
        circumpolar => return Ok(circumpolar),
    };

    let ra = Len3::new(
        -86_400.0,
        86_400.0,
        unwrap_ra([
            positions[0].ra_rad,
            positions[1].ra_rad,
            positions[2].ra_rad,
        ]),
    )?;
    let dec = Len3::new(
        -86_400.0,
        86_400.0,
        [
            positions[0].dec_rad,
            positions[1].dec_rad,
            positions[2].dec_rad,
        ],
    )?;

    let transit = {
        let m = approx.transit.seconds;
        let h = hour_angle_seconds(observer, th0_seconds, delta_t, &ra, m);
        reduced(approx.transit, m - h)
    };
    let rise = refine_crossing(
        observer, h0_rad, th0_seconds, delta_t, &ra, &dec, approx.rise,
    );
    let set = refine_crossing(
        observer, h0_rad, th0_seconds, delta_t, &ra, &dec, approx.set,
    );

    Ok(RiseSetResult::Events(DayEvents { transit, rise, set }))
}
