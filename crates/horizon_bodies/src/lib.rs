//! Geocentric and topocentric positions of the Sun and Moon.
//!
//! Truncated closed-form series from Meeus, "Astronomical Algorithms":
//! solar position from the ch. 25 polynomial + equation-of-center
//! theory, lunar position from the ch. 47 periodic tables. Both bodies
//! expose apparent equatorial and observer-relative (topocentric,
//! optionally refracted) positions.

pub mod error;
pub mod moon;
pub mod sun;

pub use error::BodyError;
pub use moon::{MoonIllumination, MoonPosition, MoonTopocentric};
pub use sun::SunTopocentric;
