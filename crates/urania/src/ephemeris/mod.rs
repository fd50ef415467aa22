//! Ephemeris boundary: the data types crossing it, the source trait the
//! chart core consumes, and the optional Swiss Ephemeris backend.

#[cfg(feature = "swisseph")]
pub mod adapter;
pub mod provider;
pub mod types;

#[cfg(feature = "swisseph")]
pub use adapter::SwissEphemerisAdapter;
pub use provider::{EphemerisError, EphemerisSource};
pub use types::{
    Ayanamsa, BodyState, EphemerisSettings, GeoLocation, HouseSystem, ZodiacType,
};
