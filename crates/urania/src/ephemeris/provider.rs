//! The ephemeris seam: a trait the chart core consumes, with errors typed
//! per failure site.

use thiserror::Error;

use crate::bodies::CelestialBody;
use crate::ephemeris::types::{BodyState, GeoLocation};

#[derive(Debug, Error)]
pub enum EphemerisError {
    #[error("ephemeris files not found at {path}: {message}")]
    FileNotFound { path: String, message: String },
    #[error("failed to calculate {body} at JD {julian_day}: {message}")]
    CalculationFailed {
        body: CelestialBody,
        julian_day: f64,
        message: String,
    },
    #[error("house cusp calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// A synchronous, side-effect-free supplier of raw astronomical state.
///
/// Implementations return longitudes already reduced to [0, 360) and
/// cusps ordered from the ascendant.
pub trait EphemerisSource {
    fn body_state(
        &self,
        julian_day: f64,
        body: CelestialBody,
    ) -> Result<BodyState, EphemerisError>;

    fn house_cusps(
        &self,
        julian_day: f64,
        location: &GeoLocation,
    ) -> Result<[f64; 12], EphemerisError>;
}
