//! Apparent and topocentric solar position (Meeus ch. 25).
//!
//! Low-accuracy theory: mean elements as polynomials of the ephemeris
//! century plus the three-term equation of center, good to ~0.01°.
//! Aberration and nutation are folded into the apparent longitude the
//! way the textbook does, through the Ω-dependent correction terms.

use std::f64::consts::TAU;

use horizon_frames::{
    Ecliptic, Equatorial, Horizontal, Observer, apparent_greenwich_seconds,
    ecliptic_to_equatorial, equatorial_to_horizontal, mean_obliquity_laskar, saemundsson,
    seconds_to_rad, topocentric_simplified,
};
use horizon_math::pmod;
use horizon_time::Moment;

/// Solar equatorial horizontal parallax at 1 AU, arcseconds.
const SOLAR_PARALLAX_ARCSEC: f64 = 8.794;

/// Geometric mean longitude of the Sun, radians.
pub fn mean_longitude(t: f64) -> f64 {
    pmod(280.46646 + t * (36_000.76983 + t * 0.0003032), 360.0).to_radians()
}

/// Mean anomaly of the Sun, radians.
pub fn mean_anomaly(t: f64) -> f64 {
    pmod(357.52911 + t * (35_999.05029 - t * 0.0001537), 360.0).to_radians()
}

/// Eccentricity of the Earth's orbit.
pub fn eccentricity(t: f64) -> f64 {
    0.016_708_634 - t * (0.000_042_037 + t * 0.000_000_126_7)
}

/// Equation of center, radians.
pub fn equation_of_center(t: f64, mean_anomaly_rad: f64) -> f64 {
    let m = mean_anomaly_rad;
    let c = (1.914602 - t * (0.004817 + t * 0.000014)) * m.sin()
        + (0.019993 - t * 0.000101) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    c.to_radians()
}

/// True geometric longitude (mean longitude + equation of center),
/// radians in [0, 2π).
pub fn true_longitude(moment: &Moment) -> f64 {
    let t = moment.century();
    pmod(
        mean_longitude(t) + equation_of_center(t, mean_anomaly(t)),
        TAU,
    )
}

/// Earth–Sun distance in AU (Meeus 25.5).
pub fn radius_vector_au(moment: &Moment) -> f64 {
    let t = moment.century();
    let e = eccentricity(t);
    let nu = mean_anomaly(t) + equation_of_center(t, mean_anomaly(t));
    1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos())
}

/// Longitude of the ascending node of the Moon's mean orbit, the Ω
/// argument of the apparent-place corrections, radians.
fn omega(t: f64) -> f64 {
    (125.04 - 1934.136 * t).to_radians()
}

/// Apparent longitude: true longitude corrected for nutation and
/// aberration through the Ω terms (Meeus 25.8), radians in [0, 2π).
pub fn apparent_longitude(moment: &Moment) -> f64 {
    let t = moment.century();
    let correction = (-0.00569 - 0.00478 * omega(t).sin()).to_radians();
    pmod(true_longitude(moment) + correction, TAU)
}

/// Apparent geocentric equatorial position.
///
/// Uses the obliquity perturbed by `0.00256° · cos Ω`, consistent with
/// the Ω-corrected apparent longitude.
pub fn apparent_equatorial(moment: &Moment) -> Equatorial {
    let t = moment.century();
    let obliquity = mean_obliquity_laskar(moment) + (0.00256 * omega(t).cos()).to_radians();
    let ecl = Ecliptic {
        lon_rad: apparent_longitude(moment),
        lat_rad: 0.0,
    };
    ecliptic_to_equatorial(&ecl, obliquity)
}

/// Solar horizontal parallax at the current distance, radians.
pub fn parallax(moment: &Moment) -> f64 {
    (SOLAR_PARALLAX_ARCSEC / 3600.0 / radius_vector_au(moment)).to_radians()
}

/// Apparent topocentric equatorial position.
///
/// The solar parallax never exceeds ~9″, so the linearized correction
/// is sufficient.
pub fn apparent_topocentric(moment: &Moment, observer: &Observer) -> Equatorial {
    let eq = apparent_equatorial(moment);
    let (rho_sin, rho_cos) = observer.parallax_constants();
    let theta = seconds_to_rad(apparent_greenwich_seconds(moment));
    topocentric_simplified(
        &eq,
        parallax(moment),
        rho_sin,
        rho_cos,
        observer.longitude_rad,
        theta,
    )
}

/// Topocentric equatorial and horizontal position of the Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTopocentric {
    pub equatorial: Equatorial,
    pub horizontal: Horizontal,
}

/// Full observer-relative position.
///
/// With `refraction`, the altitude is lifted by the Sæmundsson
/// refraction (true → apparent direction).
pub fn topocentric_position(
    moment: &Moment,
    observer: &Observer,
    refraction: bool,
) -> SunTopocentric {
    let equatorial = apparent_topocentric(moment, observer);
    let theta = seconds_to_rad(apparent_greenwich_seconds(moment));
    let mut horizontal = equatorial_to_horizontal(&equatorial, observer, theta);
    if refraction {
        horizontal.alt_rad += saemundsson(horizontal.alt_rad);
    }
    SunTopocentric {
        equatorial,
        horizontal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a_elements() {
        // 1992 Oct 13.0 TD (JDE 2448908.5), T = -0.072183436.
        let m = Moment::with_delta_t(2_448_908.5, 0.0);
        let t = m.century();
        assert!((t - (-0.072_183_436)).abs() < 1e-9);
        assert!((mean_longitude(t).to_degrees() - 201.80720).abs() < 1e-4);
        assert!((mean_anomaly(t).to_degrees() - 278.99397).abs() < 1e-4);
        assert!((eccentricity(t) - 0.016_711_668).abs() < 1e-8);
        assert!((true_longitude(&m).to_degrees() - 199.90988).abs() < 2e-4);
        assert!((radius_vector_au(&m) - 0.99766).abs() < 1e-5);
    }

    #[test]
    fn meeus_example_25a_apparent() {
        let m = Moment::with_delta_t(2_448_908.5, 0.0);
        assert!(
            (apparent_longitude(&m).to_degrees() - 199.90895).abs() < 3e-4,
            "λ = {}",
            apparent_longitude(&m).to_degrees()
        );
        let eq = apparent_equatorial(&m);
        assert!(
            (eq.ra_rad.to_degrees() - 198.38083).abs() < 3e-3,
            "α = {}",
            eq.ra_rad.to_degrees()
        );
        assert!(
            (eq.dec_rad.to_degrees() - (-7.78507)).abs() < 3e-3,
            "δ = {}",
            eq.dec_rad.to_degrees()
        );
    }

    #[test]
    fn parallax_magnitude() {
        let m = Moment::with_delta_t(2_451_545.0, 0.0);
        let p = parallax(&m).to_degrees() * 3600.0;
        // 8.794″ at 1 AU, scaled by the current distance.
        assert!((8.0..10.0).contains(&p), "parallax = {p}″");
    }

    #[test]
    fn topocentric_close_to_geocentric() {
        // The solar parallax moves the position by under 10″.
        let m = Moment::with_delta_t(2_448_908.5, 0.0);
        let obs = Observer::from_geographic(48.85, 2.35, 35.0);
        let geo = apparent_equatorial(&m);
        let topo = apparent_topocentric(&m, &obs);
        let arcsec = std::f64::consts::PI / (180.0 * 3600.0);
        assert!((geo.ra_rad - topo.ra_rad).abs() < 15.0 * arcsec);
        assert!((geo.dec_rad - topo.dec_rad).abs() < 15.0 * arcsec);
    }

    #[test]
    fn refraction_only_lifts_altitude() {
        let m = Moment::with_delta_t(2_448_908.5, 0.0);
        let obs = Observer::from_geographic(48.85, 2.35, 35.0);
        let without = topocentric_position(&m, &obs, false);
        let with = topocentric_position(&m, &obs, true);
        assert_eq!(without.equatorial, with.equatorial);
        assert_eq!(without.horizontal.az_rad, with.horizontal.az_rad);
        assert!(with.horizontal.alt_rad >= without.horizontal.alt_rad);
    }

    #[test]
    fn purity() {
        let m = Moment::with_delta_t(2_448_908.5, 0.0);
        let obs = Observer::from_geographic(48.85, 2.35, 35.0);
        assert_eq!(
            topocentric_position(&m, &obs, true),
            topocentric_position(&m, &obs, true)
        );
    }
}
