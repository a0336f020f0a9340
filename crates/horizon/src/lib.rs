//! High-level API over the engine crates.
//!
//! Re-exports the full public surface and provides one-shot wrappers
//! for the common questions: where is the Sun or Moon for an observer,
//! and when does it rise, transit, and set.
//!
//! ```no_run
//! use horizon::{sun_times, Observer, UtcTime};
//!
//! let utc = UtcTime::new(2024, 6, 21, 0, 0, 0.0);
//! let paris = Observer::from_geographic(48.85, 2.35, 35.0);
//! let events = sun_times(&utc, &paris).unwrap();
//! ```

pub mod error;

pub use error::HorizonError;
pub use horizon_bodies::{
    BodyError, MoonIllumination, MoonPosition, MoonTopocentric, SunTopocentric, moon, sun,
};
pub use horizon_events::{
    DayEvents, EventTime, RiseSetResult, SOLAR_H0_RAD, STELLAR_H0_RAD, SolveError, lunar_h0,
};
pub use horizon_frames::{
    Ecliptic, Equatorial, FrameError, Horizontal, Nutation, Observer, apparent_0ut_seconds,
    apparent_greenwich_seconds, apparent_local_rad, bennett, bennett2, ecliptic_to_equatorial,
    equatorial_to_ecliptic, equatorial_to_horizontal, mean_obliquity, mean_obliquity_laskar,
    nutation, nutation_in_ra, saemundsson, topocentric, topocentric_simplified, true_obliquity,
};
pub use horizon_math::{Len3, MathError, horner, modf, pmod, round4, round_to};
pub use horizon_time::{
    CalendarDate, J2000_JD, Moment, SECONDS_PER_DAY, UtcTime, estimate_delta_t, gregorian_to_jd,
    is_gregorian_leap_year, jd_to_calendar, jd_to_jde, jde_to_jd, julian_century, julian_to_jd,
    mean_greenwich_seconds,
};

/// Sunrise, transit, and sunset for the UTC day of `utc`.
pub fn sun_times(utc: &UtcTime, observer: &Observer) -> Result<RiseSetResult, HorizonError> {
    let moment = utc.to_moment();
    Ok(horizon_events::sun::times(&moment, observer)?)
}

/// Moonrise, transit, and moonset for the UTC day of `utc`.
pub fn moon_times(utc: &UtcTime, observer: &Observer) -> Result<RiseSetResult, HorizonError> {
    let moment = utc.to_moment();
    Ok(horizon_events::moon::times(&moment, observer)?)
}

/// Observer-relative solar position, refraction-corrected.
pub fn sun_position(utc: &UtcTime, observer: &Observer) -> SunTopocentric {
    let moment = utc.to_moment();
    horizon_bodies::sun::topocentric_position(&moment, observer, true)
}

/// Observer-relative lunar position, refraction-corrected.
pub fn moon_position(utc: &UtcTime, observer: &Observer) -> Result<MoonTopocentric, HorizonError> {
    let moment = utc.to_moment();
    Ok(horizon_bodies::moon::topocentric_position(
        &moment, observer, true,
    )?)
}

/// Illuminated fraction of the lunar disk for the instant of `utc`.
pub fn moon_illumination(utc: &UtcTime) -> Result<MoonIllumination, HorizonError> {
    let moment = utc.to_moment();
    Ok(horizon_bodies::moon::illuminated_fraction(&moment)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_times_runs_end_to_end() {
        let utc = UtcTime::new(2024, 6, 21, 0, 0, 0.0);
        let paris = Observer::from_geographic(48.85, 2.35, 35.0);
        let result = sun_times(&utc, &paris).unwrap();
        assert!(result.events().is_some());
    }

    #[test]
    fn positions_agree_between_wrappers_and_crates() {
        let utc = UtcTime::new(2024, 3, 20, 12, 0, 0.0);
        let obs = Observer::from_geographic(48.85, 2.35, 35.0);
        let moment = utc.to_moment();
        assert_eq!(
            sun_position(&utc, &obs),
            horizon_bodies::sun::topocentric_position(&moment, &obs, true)
        );
    }

    #[test]
    fn illumination_is_sane() {
        let utc = UtcTime::new(2024, 1, 25, 0, 0, 0.0); // full moon
        let ill = moon_illumination(&utc).unwrap();
        assert!(ill.fraction > 0.9, "fraction {}", ill.fraction);
    }
}
