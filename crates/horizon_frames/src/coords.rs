//! Ecliptic, equatorial, and horizontal coordinates and the rotations
//! between them (Meeus ch. 13).
//!
//! All angles are radians. Right ascension is kept in [0, 2π);
//! azimuth follows the Meeus convention: measured from south, positive
//! westward.

use std::f64::consts::TAU;

use horizon_math::pmod;

use crate::error::FrameError;
use crate::observer::Observer;

/// Ecliptic coordinates: longitude and latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ecliptic {
    /// Ecliptic longitude λ, radians.
    pub lon_rad: f64,
    /// Ecliptic latitude β, radians.
    pub lat_rad: f64,
}

impl Ecliptic {
    /// Validating constructor.
    ///
    /// # Errors
    /// [`FrameError::NanCoordinate`] if either component is NaN.
    pub fn new(lon_rad: f64, lat_rad: f64) -> Result<Self, FrameError> {
        if lon_rad.is_nan() {
            return Err(FrameError::NanCoordinate("ecliptic longitude"));
        }
        if lat_rad.is_nan() {
            return Err(FrameError::NanCoordinate("ecliptic latitude"));
        }
        Ok(Self { lon_rad, lat_rad })
    }
}

/// Equatorial coordinates: right ascension and declination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    /// Right ascension α, radians in [0, 2π).
    pub ra_rad: f64,
    /// Declination δ, radians.
    pub dec_rad: f64,
}

impl Equatorial {
    /// Validating constructor.
    ///
    /// # Errors
    /// [`FrameError::NanCoordinate`] if either component is NaN.
    pub fn new(ra_rad: f64, dec_rad: f64) -> Result<Self, FrameError> {
        if ra_rad.is_nan() {
            return Err(FrameError::NanCoordinate("right ascension"));
        }
        if dec_rad.is_nan() {
            return Err(FrameError::NanCoordinate("declination"));
        }
        Ok(Self { ra_rad, dec_rad })
    }
}

/// Horizontal coordinates: azimuth (from south, westward positive) and
/// altitude above the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizontal {
    /// Azimuth A, radians, measured from south toward west.
    pub az_rad: f64,
    /// Altitude h, radians.
    pub alt_rad: f64,
}

impl Horizontal {
    /// Validating constructor.
    ///
    /// # Errors
    /// [`FrameError::NanCoordinate`] if either component is NaN.
    pub fn new(az_rad: f64, alt_rad: f64) -> Result<Self, FrameError> {
        if az_rad.is_nan() {
            return Err(FrameError::NanCoordinate("azimuth"));
        }
        if alt_rad.is_nan() {
            return Err(FrameError::NanCoordinate("altitude"));
        }
        Ok(Self { az_rad, alt_rad })
    }
}

/// Ecliptic → equatorial rotation (Meeus 13.3, 13.4).
pub fn ecliptic_to_equatorial(ecl: &Ecliptic, obliquity_rad: f64) -> Equatorial {
    let (sin_eps, cos_eps) = obliquity_rad.sin_cos();
    let (sin_lon, cos_lon) = ecl.lon_rad.sin_cos();
    let (sin_lat, cos_lat) = ecl.lat_rad.sin_cos();

    let ra = (sin_lon * cos_eps - sin_lat / cos_lat * sin_eps).atan2(cos_lon);
    let dec = (sin_lat * cos_eps + cos_lat * sin_eps * sin_lon).asin();
    Equatorial {
        ra_rad: pmod(ra, TAU),
        dec_rad: dec,
    }
}

/// Equatorial → ecliptic rotation (Meeus 13.1, 13.2).
pub fn equatorial_to_ecliptic(eq: &Equatorial, obliquity_rad: f64) -> Ecliptic {
    let (sin_eps, cos_eps) = obliquity_rad.sin_cos();
    let (sin_ra, cos_ra) = eq.ra_rad.sin_cos();
    let (sin_dec, cos_dec) = eq.dec_rad.sin_cos();

    let lon = (sin_ra * cos_eps + sin_dec / cos_dec * sin_eps).atan2(cos_ra);
    let lat = (sin_dec * cos_eps - cos_dec * sin_eps * sin_ra).asin();
    Ecliptic {
        lon_rad: pmod(lon, TAU),
        lat_rad: lat,
    }
}

/// Equatorial → horizontal (Meeus 13.5, 13.6).
///
/// The local hour angle is `H = θ − L − α` with `θ` the apparent
/// sidereal time at Greenwich (radians) and `L` the observer's
/// west-positive longitude.
pub fn equatorial_to_horizontal(
    eq: &Equatorial,
    observer: &Observer,
    apparent_sidereal_rad: f64,
) -> Horizontal {
    let h = pmod(apparent_sidereal_rad - observer.longitude_rad - eq.ra_rad, TAU);
    let (sin_h, cos_h) = h.sin_cos();
    let (sin_phi, cos_phi) = observer.latitude_rad.sin_cos();
    let (sin_dec, cos_dec) = eq.dec_rad.sin_cos();

    let az = sin_h.atan2(cos_h * sin_phi - sin_dec / cos_dec * cos_phi);
    let alt = (sin_phi * sin_dec + cos_phi * cos_dec * cos_h).asin();
    Horizontal {
        az_rad: az,
        alt_rad: alt,
    }
}
