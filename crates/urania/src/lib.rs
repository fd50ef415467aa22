//! Natal chart computation core: sign placements, house assignment,
//! retrograde flags, lunar phase, and aspects, over a pluggable
//! ephemeris backend.

pub mod aspects;
pub mod bodies;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod moon;
pub mod subject;
pub mod zodiac;

pub use chart::{ChartAssembler, ChartInput, ChartSettings, ChartSnapshot};
pub use error::ChartError;

#[cfg(feature = "swisseph")]
pub use ephemeris::SwissEphemerisAdapter;
