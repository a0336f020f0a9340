//! Atmospheric refraction at the horizon (Meeus ch. 16).
//!
//! Bennett's formula maps apparent altitude to the refraction to
//! subtract (accurate to 0.07′); the corrected variant adds an
//! empirical sine term (0.015′). Sæmundsson's formula runs the other
//! direction, from true altitude to the refraction to add, and is
//! consistent with Bennett to ~4″. All forms assume standard
//! atmosphere (1010 mbar, 10 °C).

/// Refraction for an *apparent* altitude (Bennett 1982), radians.
///
/// Subtract the result from the apparent altitude to get the true
/// (airless) altitude. Altitudes below the horizon clamp to 0, where
/// the formula stays finite; refraction below the horizon is not
/// meaningful anyway.
pub fn bennett(apparent_alt_rad: f64) -> f64 {
    let h = apparent_alt_rad.max(0.0).to_degrees();
    let arcmin = 1.0 / (h + 7.31 / (h + 4.4)).to_radians().tan();
    (arcmin / 60.0).to_radians()
}

/// Bennett's formula with the empirical correction term, radians.
///
/// Accurate to 0.015′ for altitudes above the horizon.
pub fn bennett2(apparent_alt_rad: f64) -> f64 {
    let r_arcmin = bennett(apparent_alt_rad).to_degrees() * 60.0;
    let corrected = r_arcmin - 0.06 * (14.7 * r_arcmin + 13.0).to_radians().sin();
    (corrected / 60.0).to_radians()
}

/// Refraction for a *true* altitude (Sæmundsson 1986), radians.
///
/// Add the result to the true altitude to get the apparent altitude.
pub fn saemundsson(true_alt_rad: f64) -> f64 {
    let h = true_alt_rad.max(0.0).to_degrees();
    let arcmin = 1.02 / (h + 10.3 / (h + 5.11)).to_radians().tan();
    (arcmin / 60.0).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARCMIN: f64 = std::f64::consts::PI / (180.0 * 60.0);

    #[test]
    fn meeus_example_16a() {
        // Apparent altitude 0.5°: Bennett gives 28.754′.
        let r = bennett(0.5_f64.to_radians());
        assert!((r / ARCMIN - 28.754).abs() < 0.01, "R = {}′", r / ARCMIN);
    }

    #[test]
    fn negative_altitude_clamps() {
        let at_zero = bennett(0.0);
        let below = bennett((-5.0_f64).to_radians());
        assert_eq!(at_zero, below);
        assert!(at_zero.is_finite());
        // Horizon refraction is about 34.5′.
        assert!((at_zero / ARCMIN - 34.5).abs() < 0.5);
    }

    #[test]
    fn bennett2_close_to_bennett() {
        for deg in [0.0, 0.5, 2.0, 5.0, 15.0, 45.0, 85.0] {
            let h = (deg as f64).to_radians();
            let diff = (bennett(h) - bennett2(h)).abs();
            assert!(diff < 0.12 * ARCMIN, "at {deg}°: diff = {}′", diff / ARCMIN);
        }
    }

    #[test]
    fn saemundsson_inverts_bennett() {
        // true = apparent - bennett(apparent); then
        // saemundsson(true) should re-add nearly the same amount.
        for deg in [1.0, 3.0, 10.0, 30.0, 60.0] {
            let apparent = (deg as f64).to_radians();
            let true_alt = apparent - bennett(apparent);
            let diff = (saemundsson(true_alt) - bennett(apparent)).abs();
            assert!(
                diff < 10.0 / 3600.0 * std::f64::consts::PI / 180.0,
                "at {deg}°: diff = {}″",
                diff.to_degrees() * 3600.0
            );
        }
    }

    #[test]
    fn vanishes_high_up() {
        // Near the zenith refraction is a few hundredths of an arcmin.
        assert!(bennett(89.0_f64.to_radians()) < 0.05 * ARCMIN);
        assert!(saemundsson(89.0_f64.to_radians()) < 0.05 * ARCMIN);
    }
}
