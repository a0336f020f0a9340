//! Earth-orientation corrections and coordinate-frame conversions.
//!
//! This crate provides:
//! - IAU 1980 nutation in longitude and obliquity (63-term series)
//! - Mean (IAU 1980 and Laskar 1986) and true obliquity
//! - Apparent sidereal time (Greenwich, local, and at 0h UT)
//! - Ecliptic / equatorial / horizontal coordinate transforms
//! - Observer geodesy, topocentric parallax, atmospheric refraction

pub mod coords;
pub mod error;
pub mod nutation;
pub mod obliquity;
pub mod observer;
pub mod parallax;
pub mod refraction;
pub mod sidereal;

pub use coords::{
    Ecliptic, Equatorial, Horizontal, ecliptic_to_equatorial, equatorial_to_ecliptic,
    equatorial_to_horizontal,
};
pub use error::FrameError;
pub use nutation::{Nutation, nutation};
pub use obliquity::{mean_obliquity, mean_obliquity_laskar, nutation_in_ra, true_obliquity};
pub use observer::Observer;
pub use parallax::{topocentric, topocentric_simplified};
pub use refraction::{bennett, bennett2, saemundsson};
pub use sidereal::{
    apparent_0ut_seconds, apparent_greenwich_seconds, apparent_local_rad, rad_to_seconds,
    seconds_to_rad,
};
