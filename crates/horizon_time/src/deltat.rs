//! ΔT estimation: the offset between Universal Time and ephemeris time.
//!
//! Piecewise polynomial fit from Espenak & Meeus, "Five Millennium Canon
//! of Solar Eclipses" (NASA/TP-2006-214141), as published on the NASA
//! eclipse site. Fourteen half-open year ranges `[lower, upper)` cover
//! −500 to 2150; outside them the long-term parabola
//! `ΔT = −20 + 32 u²` applies, with `u = (year − 1820) / 100`.
//!
//! The decimal year is taken at mid-month: `year + (month − 0.5) / 12`.

use horizon_math::horner;

use crate::julian::jd_to_calendar;

const POLY_M500_500: [f64; 7] = [
    10583.6,
    -1014.41,
    33.78311,
    -5.952053,
    -0.1798452,
    0.022174192,
    0.0090316521,
];

const POLY_500_1600: [f64; 7] = [
    1574.2,
    -556.01,
    71.23472,
    0.319781,
    -0.8503463,
    -0.005050998,
    0.0083572073,
];

const POLY_1600_1700: [f64; 4] = [120.0, -0.9808, -0.01532, 1.0 / 7129.0];

const POLY_1700_1800: [f64; 5] = [8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0];

const POLY_1800_1860: [f64; 8] = [
    13.72,
    -0.332447,
    0.0068612,
    0.0041116,
    -0.00037436,
    0.0000121272,
    -0.0000001699,
    0.000000000875,
];

const POLY_1860_1900: [f64; 6] = [
    7.62,
    0.5737,
    -0.251754,
    0.01680668,
    -0.0004473624,
    1.0 / 233_174.0,
];

const POLY_1900_1920: [f64; 5] = [-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197];

const POLY_1920_1941: [f64; 4] = [21.20, 0.84493, -0.076100, 0.0020936];

const POLY_1941_1961: [f64; 4] = [29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0];

const POLY_1961_1986: [f64; 4] = [45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0];

const POLY_1986_2005: [f64; 6] = [
    63.86,
    0.3345,
    -0.060374,
    0.0017275,
    0.000651814,
    0.00002373599,
];

const POLY_2005_2050: [f64; 3] = [62.92, 0.32217, 0.005589];

/// Evaluate one fit polynomial. The tables above are compile-time
/// constants and never empty.
fn poly(u: f64, coeffs: &[f64]) -> f64 {
    horner(u, coeffs).expect("coefficient table is non-empty")
}

/// Long-term parabola, also the fallback outside the tabulated ranges.
fn parabola(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Estimate ΔT (seconds) for the given decimal year.
///
/// Ranges are half-open `[lower, upper)` and checked in ascending order.
pub fn estimate_delta_t_for_year(year: f64) -> f64 {
    if year < -500.0 {
        parabola(year)
    } else if year < 500.0 {
        poly(year / 100.0, &POLY_M500_500)
    } else if year < 1600.0 {
        poly((year - 1000.0) / 100.0, &POLY_500_1600)
    } else if year < 1700.0 {
        poly(year - 1600.0, &POLY_1600_1700)
    } else if year < 1800.0 {
        poly(year - 1700.0, &POLY_1700_1800)
    } else if year < 1860.0 {
        poly(year - 1800.0, &POLY_1800_1860)
    } else if year < 1900.0 {
        poly(year - 1860.0, &POLY_1860_1900)
    } else if year < 1920.0 {
        poly(year - 1900.0, &POLY_1900_1920)
    } else if year < 1941.0 {
        poly(year - 1920.0, &POLY_1920_1941)
    } else if year < 1961.0 {
        poly(year - 1950.0, &POLY_1941_1961)
    } else if year < 1986.0 {
        poly(year - 1975.0, &POLY_1961_1986)
    } else if year < 2005.0 {
        poly(year - 2000.0, &POLY_1986_2005)
    } else if year < 2050.0 {
        poly(year - 2000.0, &POLY_2005_2050)
    } else if year < 2150.0 {
        // Transition between the 2005-2050 fit and the parabola.
        parabola(year) - 0.5628 * (2150.0 - year)
    } else {
        parabola(year)
    }
}

/// Estimate ΔT (seconds) at a UT Julian Day.
pub fn estimate_delta_t(jd: f64) -> f64 {
    let cal = jd_to_calendar(jd);
    let year = f64::from(cal.year) + (f64::from(cal.month) - 0.5) / 12.0;
    estimate_delta_t_for_year(year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::gregorian_to_jd;

    #[test]
    fn modern_values() {
        // Observed ΔT: ~63.8s in 2000, ~56.9s in 1990, ~29.1s in 1950.
        assert!((estimate_delta_t_for_year(2000.0) - 63.9).abs() < 1.0);
        assert!((estimate_delta_t_for_year(1990.0) - 56.9).abs() < 1.0);
        assert!((estimate_delta_t_for_year(1950.0) - 29.1).abs() < 1.0);
    }

    #[test]
    fn historic_values() {
        // Espenak & Meeus table: ΔT ≈ 5710s at year 500, ≈ 1570s at
        // year 1000, ≈ 13s mid-18th century.
        assert!((estimate_delta_t_for_year(500.0) - 5710.0).abs() < 60.0);
        assert!((estimate_delta_t_for_year(1000.0) - 1574.0).abs() < 30.0);
        assert!((estimate_delta_t_for_year(1750.0) - 13.0).abs() < 5.0);
    }

    #[test]
    fn branch_boundaries_bounded() {
        // The published fit has small known discontinuities at a few
        // branch edges (1900, 1920, 2050); assert they stay bounded
        // rather than zero.
        let eps = 1e-6;
        for &b in &[
            -500.0, 500.0, 1600.0, 1700.0, 1800.0, 1860.0, 1900.0, 1920.0, 1941.0, 1961.0,
            1986.0, 2005.0, 2050.0, 2150.0,
        ] {
            let below = estimate_delta_t_for_year(b - eps);
            let above = estimate_delta_t_for_year(b + eps);
            assert!(
                (below - above).abs() < 4.0,
                "jump at {b}: {below} vs {above}"
            );
        }
    }

    #[test]
    fn from_jd_uses_mid_month_year() {
        let jd = gregorian_to_jd(2000, 1, 1.5);
        let dt = estimate_delta_t(jd);
        assert!((dt - estimate_delta_t_for_year(2000.0 + 0.5 / 12.0)).abs() < 1e-9);
    }

    #[test]
    fn far_future_parabola() {
        let u: f64 = (3000.0 - 1820.0) / 100.0;
        assert!((estimate_delta_t_for_year(3000.0) - (-20.0 + 32.0 * u * u)).abs() < 1e-9);
    }
}
