//! Topocentric parallax: reduction of geocentric equatorial
//! coordinates to the observer's position on the ellipsoid
//! (Meeus ch. 40).
//!
//! Two variants: the rigorous correction (40.2–40.3) for near bodies
//! (the Moon), and the linearized form (40.4–40.5) adequate for bodies
//! whose parallax stays below ~1′ (the Sun and beyond).

use std::f64::consts::TAU;

use horizon_math::pmod;

use crate::coords::Equatorial;

/// High-precision topocentric correction for right ascension and
/// declination.
///
/// * `parallax_rad` — equatorial horizontal parallax of the body
/// * `rho_sin`, `rho_cos` — observer constants from
///   [`Observer::parallax_constants`](crate::Observer::parallax_constants)
/// * `lng_west_rad` — observer longitude, west positive
/// * `apparent_sidereal_rad` — apparent sidereal time at Greenwich
pub fn topocentric(
    eq: &Equatorial,
    parallax_rad: f64,
    rho_sin: f64,
    rho_cos: f64,
    lng_west_rad: f64,
    apparent_sidereal_rad: f64,
) -> Equatorial {
    let hour_angle = pmod(apparent_sidereal_rad - lng_west_rad - eq.ra_rad, TAU);
    let (sin_h, cos_h) = hour_angle.sin_cos();
    let (sin_dec, cos_dec) = eq.dec_rad.sin_cos();
    let sin_par = parallax_rad.sin();

    let delta_ra = (-rho_cos * sin_par * sin_h).atan2(cos_dec - rho_cos * sin_par * cos_h);
    let dec = ((sin_dec - rho_sin * sin_par) * delta_ra.cos())
        .atan2(cos_dec - rho_cos * sin_par * cos_h);

    Equatorial {
        ra_rad: pmod(eq.ra_rad + delta_ra, TAU),
        dec_rad: dec,
    }
}

/// Linearized topocentric correction for distant bodies.
///
/// First-order in the parallax; adequate when the parallax is small
/// (solar parallax is 8.8″).
pub fn topocentric_simplified(
    eq: &Equatorial,
    parallax_rad: f64,
    rho_sin: f64,
    rho_cos: f64,
    lng_west_rad: f64,
    apparent_sidereal_rad: f64,
) -> Equatorial {
    let hour_angle = pmod(apparent_sidereal_rad - lng_west_rad - eq.ra_rad, TAU);
    let (sin_h, cos_h) = hour_angle.sin_cos();
    let (sin_dec, cos_dec) = eq.dec_rad.sin_cos();

    let delta_ra = -parallax_rad * rho_cos * sin_h / cos_dec;
    let delta_dec = -parallax_rad * (rho_sin * cos_dec - rho_cos * cos_h * sin_dec);

    Equatorial {
        ra_rad: pmod(eq.ra_rad + delta_ra, TAU),
        dec_rad: eq.dec_rad + delta_dec,
    }
}
