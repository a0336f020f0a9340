//! Rise, transit, and set times for the Sun and Moon.
//!
//! Implements the Meeus ch. 15 solver: a circumpolar test, approximate
//! times from the day's 0h position, and refined times from a
//! three-day position window with one interpolation-based correction
//! pass. Sun and Moon entry points assemble the standard altitude,
//! sidereal time, ΔT, and position samples for the core solver.

pub mod error;
pub mod moon;
pub mod solver;
pub mod sun;
pub mod types;

pub use error::SolveError;
pub use solver::{approx_times, approx_transit, times};
pub use types::{DayEvents, EventTime, RiseSetResult, lunar_h0, SOLAR_H0_RAD, STELLAR_H0_RAD};
