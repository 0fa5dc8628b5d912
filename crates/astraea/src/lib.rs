//! Natal chart computation for the Plumbob in-game calendar.
//!
//! The pipeline is: [`calendar`] converts a character's age and the current
//! sim day into a birth moment and a continuous day count, [`ephemeris`]
//! turns that day count into ecliptic longitudes for the sixteen chart
//! bodies plus the four angle points, and [`chart`] partitions the
//! longitudes into zodiac signs and houses.

pub mod calendar;
pub mod chart;
pub mod ephemeris;

pub use calendar::{BirthMoment, SimCalendar};
pub use chart::{generate, ChartEntry, GeneratedChart, NatalChart};
pub use ephemeris::{compute_positions, BodyPositions};
