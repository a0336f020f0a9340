//! Julian Day ↔ calendar conversions.
//!
//! Algorithms from Meeus, "Astronomical Algorithms", ch. 7. Valid for
//! any date from JD 0 onward (4712 BC); behavior before JD 0 is
//! undefined. The Gregorian reform is a single logical boundary:
//! `gregorian_to_jd(1582, 10, 15.0)` is 2299160.5, and the inverse
//! switches branches at rounded JD 2299161.

use crate::deltat::estimate_delta_t;

/// Julian Date of the J2000.0 epoch (2000 Jan 1.5 TD).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of 1582 Oct 15.0, the first day of the Gregorian calendar.
pub const GREGORIAN_REFORM_JD: f64 = 2_299_160.5;

/// A calendar date with fractional day, as returned by [`jd_to_calendar`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    /// Day of month including the time-of-day fraction.
    pub day: f64,
}

/// Shared month/year adjustment: January and February count as months
/// 13 and 14 of the preceding year.
fn adjusted(year: i32, month: u32) -> (f64, f64) {
    if month <= 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    }
}

/// Convert a proleptic Gregorian calendar date to a Julian Day number.
///
/// `day` may carry a time-of-day fraction.
pub fn gregorian_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = adjusted(year, month);
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert a proleptic Julian calendar date to a Julian Day number.
///
/// Same as [`gregorian_to_jd`] without the century correction.
pub fn julian_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = adjusted(year, month);
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day - 1524.5
}

/// Convert a Julian Day number back to a calendar date.
///
/// Selects the Julian or Gregorian branch on rounded JD ≥ 2299161,
/// matching the forward conversions at the 1582 reform.
pub fn jd_to_calendar(jd: f64) -> CalendarDate {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    CalendarDate {
        year: year as i32,
        month: month as u32,
        day,
    }
}

/// Gregorian leap-year rule.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Julian centuries from J2000.0. Pass a JD for UT centuries or a JDE
/// for ephemeris centuries.
pub fn julian_century(jd_or_jde: f64) -> f64 {
    (jd_or_jde - J2000_JD) / 36_525.0
}

/// Convert a UT Julian Day to an ephemeris Julian Day.
///
/// If `delta_t` (seconds) is `None`, it is estimated from `jd`.
pub fn jd_to_jde(jd: f64, delta_t: Option<f64>) -> f64 {
    let dt = delta_t.unwrap_or_else(|| estimate_delta_t(jd));
    jd + dt / SECONDS_PER_DAY
}

/// Convert an ephemeris Julian Day to a UT Julian Day.
///
/// If `delta_t` (seconds) is `None`, it is estimated from `jde` (the
/// ΔT model varies slowly enough that the distinction is negligible).
pub fn jde_to_jd(jde: f64, delta_t: Option<f64>) -> f64 {
    let dt = delta_t.unwrap_or_else(|| estimate_delta_t(jde));
    jde - dt / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_fixed_point() {
        assert_eq!(gregorian_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn meeus_example_7a() {
        // Sputnik launch: 1957 Oct 4.81
        let jd = gregorian_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-9, "got {jd}");
    }

    #[test]
    fn meeus_example_7b() {
        // 333 Jan 27.5 (Julian calendar)
        let jd = julian_to_jd(333, 1, 27.5);
        assert!((jd - 1_842_713.0).abs() < 1e-9, "got {jd}");
    }

    #[test]
    fn january_adjustment() {
        assert_eq!(gregorian_to_jd(1987, 1, 27.0), 2_446_822.5);
        assert_eq!(gregorian_to_jd(1988, 6, 19.5), 2_447_332.0);
    }

    #[test]
    fn negative_year() {
        // -1000 Jul 12.5 (Julian calendar), Meeus table ch. 7
        let jd = julian_to_jd(-1000, 7, 12.5);
        assert!((jd - 1_356_001.0).abs() < 1e-9, "got {jd}");
    }

    #[test]
    fn reform_boundary_consistent() {
        // The first Gregorian day rounds to exactly the branch threshold.
        let jd = gregorian_to_jd(1582, 10, 15.0);
        assert_eq!(jd, GREGORIAN_REFORM_JD);
        let cal = jd_to_calendar(jd);
        assert_eq!((cal.year, cal.month), (1582, 10));
        assert!((cal.day - 15.0).abs() < 1e-9, "got {}", cal.day);

        // The last Julian day (1582 Oct 4) is the preceding JD.
        let cal = jd_to_calendar(jd - 1.0);
        assert_eq!((cal.year, cal.month), (1582, 10));
        assert!((cal.day - 4.0).abs() < 1e-9, "got {}", cal.day);
    }

    #[test]
    fn gregorian_roundtrip() {
        for &(y, m, d) in &[
            (1600, 3, 1.0),
            (1999, 12, 31.25),
            (2000, 2, 29.5),
            (2024, 7, 4.75),
            (2100, 1, 1.0),
        ] {
            let cal = jd_to_calendar(gregorian_to_jd(y, m, d));
            assert_eq!(cal.year, y);
            assert_eq!(cal.month, m);
            assert!((cal.day - d).abs() < 1e-8, "{y}-{m}-{d} → {}", cal.day);
        }
    }

    #[test]
    fn julian_roundtrip() {
        for &(y, m, d) in &[(-500, 6, 15.0), (333, 1, 27.5), (1000, 10, 10.5)] {
            let cal = jd_to_calendar(julian_to_jd(y, m, d));
            assert_eq!(cal.year, y);
            assert_eq!(cal.month, m);
            assert!((cal.day - d).abs() < 1e-8, "{y}-{m}-{d} → {}", cal.day);
        }
    }

    #[test]
    fn leap_years() {
        assert!(is_gregorian_leap_year(2000));
        assert!(!is_gregorian_leap_year(1900));
        assert!(is_gregorian_leap_year(2004));
        assert!(!is_gregorian_leap_year(2023));
        assert!(is_gregorian_leap_year(-4)); // proleptic
    }

    #[test]
    fn century_at_j2000() {
        assert_eq!(julian_century(J2000_JD), 0.0);
        assert!((julian_century(2_451_545.0 + 36_525.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn jde_roundtrip_with_explicit_delta_t() {
        let jd = 2_451_545.0;
        let jde = jd_to_jde(jd, Some(63.8));
        assert!((jde - (jd + 63.8 / 86_400.0)).abs() < 1e-12);
        assert!((jde_to_jd(jde, Some(63.8)) - jd).abs() < 1e-12);
    }
}
