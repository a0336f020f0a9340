//! `Moment`: a UT Julian Day paired with its ΔT and ephemeris Julian Day.

use crate::deltat::estimate_delta_t;
use crate::julian::{SECONDS_PER_DAY, julian_century};

/// An instant on the UT and ephemeris time axes.
///
/// Holds the UT Julian Day `jd`, the ΔT offset in seconds, and the
/// derived ephemeris Julian Day `jde = jd + ΔT/86400`. The invariant
/// between the three always holds after construction; the fields are
/// private so it cannot be broken. Immutable: derived instants (start
/// of day, day offsets) are new values.
///
/// Construction with an estimated ΔT walks the piecewise model, so
/// callers computing several quantities at one instant should build the
/// `Moment` once and reuse it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moment {
    jd: f64,
    delta_t: f64,
    jde: f64,
}

impl Moment {
    /// Moment at a UT Julian Day, with ΔT estimated from `jd`.
    pub fn new(jd: f64) -> Self {
        Self::with_delta_t(jd, estimate_delta_t(jd))
    }

    /// Moment at a UT Julian Day with an explicit ΔT in seconds.
    pub fn with_delta_t(jd: f64, delta_t: f64) -> Self {
        Self {
            jd,
            delta_t,
            jde: jd + delta_t / SECONDS_PER_DAY,
        }
    }

    /// UT Julian Day.
    pub fn jd(&self) -> f64 {
        self.jd
    }

    /// ΔT in seconds.
    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Ephemeris Julian Day.
    pub fn jde(&self) -> f64 {
        self.jde
    }

    /// A new moment at the preceding UT midnight, ΔT preserved.
    pub fn start_of_day(&self) -> Self {
        Self::with_delta_t((self.jde - 0.5).floor() + 0.5, self.delta_t)
    }

    /// A new moment offset by whole or fractional days, ΔT preserved
    /// (the model varies by well under a second per day).
    pub fn add_days(&self, days: f64) -> Self {
        Self::with_delta_t(self.jd + days, self.delta_t)
    }

    /// Julian centuries of ephemeris time from J2000.0, the argument of
    /// the orbital-theory polynomials.
    pub fn century(&self) -> f64 {
        julian_century(self.jde)
    }

    /// Julian centuries of UT from J2000.0, used by sidereal time.
    pub fn century_ut(&self) -> f64 {
        julian_century(self.jd)
    }
}
