//! Mean and true obliquity of the ecliptic, and the equation of the
//! equinoxes.
//!
//! Two mean-obliquity models are provided: the IAU 1980 cubic (±1″ over
//! ±2000 years from J2000) and the Laskar 1986 tenth-degree polynomial
//! in T/100 (±0.01″ over ±1000 years, usable over ±10000).

use horizon_time::Moment;

use crate::nutation::nutation;

/// Arcseconds to radians.
const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Obliquity at J2000.0: 23°26′21.448″, in arcseconds.
const EPS_J2000_ARCSEC: f64 = 84_381.448;

/// IAU 1980 mean obliquity (Meeus 22.2), radians.
pub fn mean_obliquity(moment: &Moment) -> f64 {
    let t = moment.century();
    let arcsec = EPS_J2000_ARCSEC + t * (-46.8150 + t * (-0.00059 + t * 0.001813));
    arcsec * ARCSEC_TO_RAD
}

/// Laskar 1986 mean obliquity (Meeus 22.3), radians.
///
/// The polynomial argument is `U = T/100`, ten thousand Julian years.
pub fn mean_obliquity_laskar(moment: &Moment) -> f64 {
    let u = moment.century() / 100.0;
    let arcsec = EPS_J2000_ARCSEC
        + u * (-4680.93
            + u * (-1.55
                + u * (1999.25
                    + u * (-51.38
                        + u * (-249.67
                            + u * (-39.05 + u * (7.12 + u * (27.87 + u * (5.79 + u * 2.45)))))))));
    arcsec * ARCSEC_TO_RAD
}

/// True obliquity: Laskar mean obliquity plus the nutation in obliquity.
pub fn true_obliquity(moment: &Moment) -> f64 {
    mean_obliquity_laskar(moment) + nutation(moment).delta_eps_rad
}

/// Nutation in right ascension (the equation of the equinoxes):
/// `Δψ · cos ε`, radians.
pub fn nutation_in_ra(moment: &Moment) -> f64 {
    nutation(moment).delta_psi_rad * true_obliquity(moment).cos()
}
