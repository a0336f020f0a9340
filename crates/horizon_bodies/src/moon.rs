//! Geocentric and topocentric lunar position (Meeus ch. 47) and
//! illuminated fraction (ch. 48).
//!
//! The position comes from the truncated ELP-2000/82 tables printed in
//! the textbook: 60 periodic terms for longitude and distance, 60 for
//! latitude, plus the A1/A2/A3 planetary additives. Accuracy ~10″ in
//! longitude, ~4″ in latitude, ~0.1 s in horizontal parallax.

use std::f64::consts::TAU;

use horizon_frames::{
    Ecliptic, Equatorial, Horizontal, Observer, apparent_greenwich_seconds,
    ecliptic_to_equatorial, equatorial_to_horizontal, nutation, saemundsson, seconds_to_rad,
    topocentric, true_obliquity,
};
use horizon_math::pmod;
use horizon_time::Moment;

use crate::error::BodyError;
use crate::sun;

/// IAU 1976 equatorial radius of the Earth, km.
const EARTH_RADIUS_KM: f64 = 6378.14;

/// Kilometers per astronomical unit.
const KM_PER_AU: f64 = 149_597_870.0;

/// Mean Earth–Moon distance term of the ch. 47 theory, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Geocentric ecliptic position of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Geocentric ecliptic longitude λ (mean equinox of date), radians.
    pub lon_rad: f64,
    /// Geocentric ecliptic latitude β, radians.
    pub lat_rad: f64,
    /// Earth–Moon center distance, km.
    pub distance_km: f64,
}

/// Topocentric lunar position: equatorial + horizontal coordinates and
/// the parallactic angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonTopocentric {
    pub equatorial: Equatorial,
    pub horizontal: Horizontal,
    /// Parallactic angle q, radians.
    pub parallactic_angle_rad: f64,
}

/// Illumination state of the lunar disk (Meeus ch. 48).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonIllumination {
    /// Illuminated fraction of the disk, in [0, 1].
    pub fraction: f64,
    /// Phase angle i, radians.
    pub phase_angle_rad: f64,
}

/// Longitude + distance periodic terms (Meeus table 47.A).
///
/// Row: `[nD, nM, nM′, nF, Σl, Σr]` — sine amplitude for longitude in
/// 1e-6 degree, cosine amplitude for distance in 1e-3 km. Rows whose
/// solar-anomaly multiplier nM is ±1/±2 are scaled by E/E² at
/// evaluation time.
#[rustfmt::skip]
static LON_DIST_TERMS: [[f64; 6]; 60] = [
    [0.0,  0.0,  1.0,  0.0,  6_288_774.0, -20_905_355.0],
    [2.0,  0.0, -1.0,  0.0,  1_274_027.0,  -3_699_111.0],
    [2.0,  0.0,  0.0,  0.0,    658_314.0,  -2_955_968.0],
    [0.0,  0.0,  2.0,  0.0,    213_618.0,    -569_925.0],
    [0.0,  1.0,  0.0,  0.0,   -185_116.0,      48_888.0],
    [0.0,  0.0,  0.0,  2.0,   -114_332.0,      -3_149.0],
    [2.0,  0.0, -2.0,  0.0,     58_793.0,     246_158.0],
    [2.0, -1.0, -1.0,  0.0,     57_066.0,    -152_138.0],
    [2.0,  0.0,  1.0,  0.0,     53_322.0,    -170_733.0],
    [2.0, -1.0,  0.0,  0.0,     45_758.0,    -204_586.0],
    [0.0,  1.0, -1.0,  0.0,    -40_923.0,    -129_620.0],
    [1.0,  0.0,  0.0,  0.0,    -34_720.0,     108_743.0],
    [0.0,  1.0,  1.0,  0.0,    -30_383.0,     104_755.0],
    [2.0,  0.0,  0.0, -2.0,     15_327.0,      10_321.0],
    [0.0,  0.0,  1.0,  2.0,    -12_528.0,           0.0],
    [0.0,  0.0,  1.0, -2.0,     10_980.0,      79_661.0],
    [4.0,  0.0, -1.0,  0.0,     10_675.0,     -34_782.0],
    [0.0,  0.0,  3.0,  0.0,     10_034.0,     -23_210.0],
    [4.0,  0.0, -2.0,  0.0,      8_548.0,     -21_636.0],
    [2.0,  1.0, -1.0,  0.0,     -7_888.0,      24_208.0],
    [2.0,  1.0,  0.0,  0.0,     -6_766.0,      30_824.0],
    [1.0,  0.0, -1.0,  0.0,     -5_163.0,      -8_379.0],
    [1.0,  1.0,  0.0,  0.0,      4_987.0,     -16_675.0],
    [2.0, -1.0,  1.0,  0.0,      4_036.0,     -12_831.0],
    [2.0,  0.0,  2.0,  0.0,      3_994.0,     -10_445.0],
    [4.0,  0.0,  0.0,  0.0,      3_861.0,     -11_650.0],
    [2.0,  0.0, -3.0,  0.0,      3_665.0,      14_403.0],
    [0.0,  1.0, -2.0,  0.0,     -2_689.0,      -7_003.0],
    [2.0,  0.0, -1.0,  2.0,     -2_602.0,           0.0],
    [2.0, -1.0, -2.0,  0.0,      2_390.0,      10_056.0],
    [1.0,  0.0,  1.0,  0.0,     -2_348.0,       6_322.0],
    [2.0, -2.0,  0.0,  0.0,      2_236.0,      -9_884.0],
    [0.0,  1.0,  2.0,  0.0,     -2_120.0,       5_751.0],
    [0.0,  2.0,  0.0,  0.0,     -2_069.0,           0.0],
    [2.0, -2.0, -1.0,  0.0,      2_048.0,      -4_950.0],
    [2.0,  0.0,  1.0, -2.0,     -1_773.0,       4_130.0],
    [2.0,  0.0,  0.0,  2.0,     -1_595.0,           0.0],
    [4.0, -1.0, -1.0,  0.0,      1_215.0,      -3_958.0],
    [0.0,  0.0,  2.0,  2.0,     -1_110.0,           0.0],
    [3.0,  0.0, -1.0,  0.0,       -892.0,       3_258.0],
    [2.0,  1.0,  1.0,  0.0,       -810.0,       2_616.0],
    [4.0, -1.0, -2.0,  0.0,        759.0,      -1_897.0],
    [0.0,  2.0, -1.0,  0.0,       -713.0,      -2_117.0],
    [2.0,  2.0, -1.0,  0.0,       -700.0,       2_354.0],
    [2.0,  1.0, -2.0,  0.0,        691.0,           0.0],
    [2.0, -1.0,  0.0, -2.0,        596.0,           0.0],
    [4.0,  0.0,  1.0,  0.0,        549.0,      -1_423.0],
    [0.0,  0.0,  4.0,  0.0,        537.0,      -1_117.0],
    [4.0, -1.0,  0.0,  0.0,        520.0,      -1_571.0],
    [1.0,  0.0, -2.0,  0.0,       -487.0,      -1_739.0],
    [2.0,  1.0,  0.0, -2.0,       -399.0,           0.0],
    [0.0,  0.0,  2.0, -2.0,       -381.0,      -4_421.0],
    [1.0,  1.0,  1.0,  0.0,        351.0,           0.0],
    [3.0,  0.0, -2.0,  0.0,       -340.0,           0.0],
    [4.0,  0.0, -3.0,  0.0,        330.0,           0.0],
    [2.0, -1.0,  2.0,  0.0,        327.0,           0.0],
    [0.0,  2.0,  1.0,  0.0,       -323.0,       1_165.0],
    [1.0,  1.0, -1.0,  0.0,        299.0,           0.0],
    [2.0,  0.0,  3.0,  0.0,        294.0,           0.0],
    [2.0,  0.0, -1.0, -2.0,          0.0,       8_752.0],
];

/// Latitude periodic terms (Meeus table 47.B).
///
/// Row: `[nD, nM, nM′, nF, Σb]` — sine amplitude in 1e-6 degree.
#[rustfmt::skip]
static LAT_TERMS: [[f64; 5]; 60] = [
    [0.0,  0.0,  0.0,  1.0,  5_128_122.0],
    [0.0,  0.0,  1.0,  1.0,    280_602.0],
    [0.0,  0.0,  1.0, -1.0,    277_693.0],
    [2.0,  0.0,  0.0, -1.0,    173_237.0],
    [2.0,  0.0, -1.0,  1.0,     55_413.0],
    [2.0,  0.0, -1.0, -1.0,     46_271.0],
    [2.0,  0.0,  0.0,  1.0,     32_573.0],
    [0.0,  0.0,  2.0,  1.0,     17_198.0],
    [2.0,  0.0,  1.0, -1.0,      9_266.0],
    [0.0,  0.0,  2.0, -1.0,      8_822.0],
    [2.0, -1.0,  0.0, -1.0,      8_216.0],
    [2.0,  0.0, -2.0, -1.0,      4_324.0],
    [2.0,  0.0,  1.0,  1.0,      4_200.0],
    [2.0,  1.0,  0.0, -1.0,     -3_359.0],
    [2.0, -1.0, -1.0,  1.0,      2_463.0],
    [2.0, -1.0,  0.0,  1.0,      2_211.0],
    [2.0, -1.0, -1.0, -1.0,      2_065.0],
    [0.0,  1.0, -1.0, -1.0,     -1_870.0],
    [4.0,  0.0, -1.0, -1.0,      1_828.0],
    [0.0,  1.0,  0.0,  1.0,     -1_794.0],
    [0.0,  0.0,  0.0,  3.0,     -1_749.0],
    [0.0,  1.0, -1.0,  1.0,     -1_565.0],
    [1.0,  0.0,  0.0,  1.0,     -1_491.0],
    [0.0,  1.0,  1.0,  1.0,     -1_475.0],
    [0.0,  1.0,  1.0, -1.0,     -1_410.0],
    [0.0,  1.0,  0.0, -1.0,     -1_344.0],
    [1.0,  0.0,  0.0, -1.0,     -1_335.0],
    [0.0,  0.0,  3.0,  1.0,      1_107.0],
    [4.0,  0.0,  0.0, -1.0,      1_021.0],
    [4.0,  0.0, -1.0,  1.0,        833.0],
    [0.0,  0.0,  1.0, -3.0,        777.0],
    [4.0,  0.0, -2.0,  1.0,        671.0],
    [2.0,  0.0,  0.0, -3.0,        607.0],
    [2.0,  0.0,  2.0, -1.0,        596.0],
    [2.0, -1.0,  1.0, -1.0,        491.0],
    [2.0,  0.0, -2.0,  1.0,       -451.0],
    [0.0,  0.0,  3.0, -1.0,        439.0],
    [2.0,  0.0,  2.0,  1.0,        422.0],
    [2.0,  0.0, -3.0, -1.0,        421.0],
    [2.0,  1.0, -1.0,  1.0,       -366.0],
    [2.0,  1.0,  0.0,  1.0,       -351.0],
    [4.0,  0.0,  0.0,  1.0,        331.0],
    [2.0, -1.0,  1.0,  1.0,        315.0],
    [2.0, -2.0,  0.0, -1.0,        302.0],
    [0.0,  0.0,  1.0,  3.0,       -283.0],
    [2.0,  1.0,  1.0, -1.0,       -229.0],
    [1.0,  1.0,  0.0, -1.0,        223.0],
    [1.0,  1.0,  0.0,  1.0,        223.0],
    [0.0,  1.0, -2.0, -1.0,       -220.0],
    [2.0,  1.0, -1.0, -1.0,       -220.0],
    [1.0,  0.0,  1.0,  1.0,       -185.0],
    [2.0, -1.0, -2.0, -1.0,        181.0],
    [0.0,  1.0,  2.0,  1.0,       -177.0],
    [4.0,  0.0, -2.0, -1.0,        176.0],
    [4.0, -1.0, -1.0, -1.0,        166.0],
    [1.0,  0.0,  1.0, -1.0,       -164.0],
    [4.0,  0.0,  1.0, -1.0,        132.0],
    [1.0,  0.0, -1.0, -1.0,       -119.0],
    [4.0, -1.0,  0.0, -1.0,        115.0],
    [2.0, -2.0,  0.0,  1.0,        107.0],
];

/// Amplitude multiplier for the eccentricity correction: 1, E, or E²
/// by the absolute value of the solar-anomaly multiplier.
///
/// # Errors
/// [`BodyError::DataTable`] for any multiplier outside {-2, …, 2}:
/// the tables are fixed constants, so this indicates corruption.
fn e_multiplier(e: f64, m_coeff: f64) -> Result<f64, BodyError> {
    match m_coeff.abs() as i64 {
        0 => Ok(1.0),
        1 => Ok(e),
        2 => Ok(e * e),
        _ => Err(BodyError::DataTable(
            "solar-anomaly multiplier outside {-2..2}",
        )),
    }
}

/// Fundamental arguments of the lunar theory, radians:
/// `(L′, D, M, M′, F)`.
fn fundamental_arguments(t: f64) -> (f64, f64, f64, f64, f64) {
    // Mean longitude, referred to the mean equinox of date (deg)
    let lp = 218.316_447_7
        + t * (481_267.881_234_21
            + t * (-0.001_578_6 + t * (1.0 / 538_841.0 - t / 65_194_000.0)));

    // Mean elongation of the Moon (deg)
    let d = 297.850_192_1
        + t * (445_267.111_403_4
            + t * (-0.001_881_9 + t * (1.0 / 545_868.0 - t / 113_065_000.0)));

    // Mean anomaly of the Sun (deg)
    let m = 357.529_109_2 + t * (35_999.050_290_9 + t * (-0.000_153_6 + t / 24_490_000.0));

    // Mean anomaly of the Moon (deg)
    let mp = 134.963_396_4
        + t * (477_198.867_505_5 + t * (0.008_741_4 + t * (1.0 / 69_699.0 - t / 14_712_000.0)));

    // Argument of latitude (deg)
    let f = 93.272_095_0
        + t * (483_202.017_523_3 + t * (-0.003_653_9 + t * (-1.0 / 3_526_000.0 + t / 863_310_000.0)));

    (
        pmod(lp, 360.0).to_radians(),
        pmod(d, 360.0).to_radians(),
        pmod(m, 360.0).to_radians(),
        pmod(mp, 360.0).to_radians(),
        pmod(f, 360.0).to_radians(),
    )
}

/// Geocentric ecliptic longitude, latitude, and distance.
pub fn geocentric(moment: &Moment) -> Result<MoonPosition, BodyError> {
    let t = moment.century();
    let (lp, d, m, mp, f) = fundamental_arguments(t);

    // Eccentricity correction factor (47.6).
    let e = 1.0 - t * (0.002_516 + t * 0.000_007_4);

    // Planetary additives (deg → rad).
    let a1 = pmod(119.75 + 131.849 * t, 360.0).to_radians();
    let a2 = pmod(53.09 + 479_264.290 * t, 360.0).to_radians();
    let a3 = pmod(313.45 + 481_266.484 * t, 360.0).to_radians();

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for row in &LON_DIST_TERMS {
        let mult = e_multiplier(e, row[1])?;
        let arg = row[0] * d + row[1] * m + row[2] * mp + row[3] * f;
        sum_l += row[4] * mult * arg.sin();
        sum_r += row[5] * mult * arg.cos();
    }

    let mut sum_b = 0.0;
    for row in &LAT_TERMS {
        let mult = e_multiplier(e, row[1])?;
        let arg = row[0] * d + row[1] * m + row[2] * mp + row[3] * f;
        sum_b += row[4] * mult * arg.sin();
    }

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    Ok(MoonPosition {
        lon_rad: pmod(lp + (sum_l * 1e-6).to_radians(), TAU),
        lat_rad: (sum_b * 1e-6).to_radians(),
        distance_km: MEAN_DISTANCE_KM + sum_r * 1e-3,
    })
}

/// Equatorial horizontal parallax of the Moon at a given distance,
/// radians.
pub fn parallax(distance_km: f64) -> f64 {
    (EARTH_RADIUS_KM / distance_km).asin()
}

/// Apparent geocentric equatorial position (nutation applied), along
/// with the distance in km.
pub fn apparent_equatorial(moment: &Moment) -> Result<(Equatorial, f64), BodyError> {
    let pos = geocentric(moment)?;
    let ecl = Ecliptic {
        lon_rad: pmod(pos.lon_rad + nutation(moment).delta_psi_rad, TAU),
        lat_rad: pos.lat_rad,
    };
    let eq = ecliptic_to_equatorial(&ecl, true_obliquity(moment));
    Ok((eq, pos.distance_km))
}

/// Apparent topocentric equatorial position, with the distance in km.
///
/// The lunar parallax approaches a degree, so the rigorous correction
/// is required.
pub fn apparent_topocentric(
    moment: &Moment,
    observer: &Observer,
) -> Result<(Equatorial, f64), BodyError> {
    let (eq, distance_km) = apparent_equatorial(moment)?;
    let (rho_sin, rho_cos) = observer.parallax_constants();
    let theta = seconds_to_rad(apparent_greenwich_seconds(moment));
    let topo = topocentric(
        &eq,
        parallax(distance_km),
        rho_sin,
        rho_cos,
        observer.longitude_rad,
        theta,
    );
    Ok((topo, distance_km))
}

/// Full observer-relative position: topocentric equatorial,
/// horizontal, and the parallactic angle.
///
/// With `refraction`, the altitude is lifted by the Sæmundsson
/// refraction (true → apparent direction).
pub fn topocentric_position(
    moment: &Moment,
    observer: &Observer,
    refraction: bool,
) -> Result<MoonTopocentric, BodyError> {
    let (equatorial, _) = apparent_topocentric(moment, observer)?;
    let theta = seconds_to_rad(apparent_greenwich_seconds(moment));
    let mut horizontal = equatorial_to_horizontal(&equatorial, observer, theta);
    if refraction {
        horizontal.alt_rad += saemundsson(horizontal.alt_rad);
    }

    // Parallactic angle (Meeus 14.1).
    let hour_angle = pmod(theta - observer.longitude_rad - equatorial.ra_rad, TAU);
    let q = hour_angle.sin().atan2(
        observer.latitude_rad.tan() * equatorial.dec_rad.cos()
            - equatorial.dec_rad.sin() * hour_angle.cos(),
    );

    Ok(MoonTopocentric {
        equatorial,
        horizontal,
        parallactic_angle_rad: q,
    })
}

/// Illuminated fraction of the disk and phase angle (Meeus 48.2, 48.3).
pub fn illuminated_fraction(moment: &Moment) -> Result<MoonIllumination, BodyError> {
    let (moon_eq, moon_dist_km) = apparent_equatorial(moment)?;
    let sun_eq = sun::apparent_equatorial(moment);
    let sun_dist_km = sun::radius_vector_au(moment) * KM_PER_AU;

    // Geocentric elongation of the Moon from the Sun (48.2).
    let cos_psi = sun_eq.dec_rad.sin() * moon_eq.dec_rad.sin()
        + sun_eq.dec_rad.cos()
            * moon_eq.dec_rad.cos()
            * (sun_eq.ra_rad - moon_eq.ra_rad).cos();
    let psi = cos_psi.clamp(-1.0, 1.0).acos();

    // Phase angle (48.3).
    let i = (sun_dist_km * psi.sin()).atan2(moon_dist_km - sun_dist_km * psi.cos());

    Ok(MoonIllumination {
        fraction: (1.0 + i.cos()) / 2.0,
        phase_angle_rad: i,
    })
}
