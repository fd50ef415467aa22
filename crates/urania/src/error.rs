use thiserror::Error;

use crate::ephemeris::EphemerisError;
use crate::subject::SubjectError;

/// Failures surfaced by chart computation.
///
/// Latitude beyond the polar circles is not represented here: it is an
/// intentional clamp with a logged warning, not a failure.
#[derive(Error, Debug)]
pub enum ChartError {
    /// A longitude left the [0, 360) contract range. Out-of-range input is
    /// reported, never silently wrapped; callers that want wrapping apply
    /// [`normalize_degrees`](crate::zodiac::normalize_degrees) first.
    #[error("degree {degree} is outside [0, 360)")]
    DegreeOutOfRange { degree: f64 },

    /// No house sector matched a body degree against the cusp sequence.
    /// Indicates malformed cusps; the body is never defaulted into an
    /// arbitrary house.
    #[error("no house sector contains degree {degree}")]
    UnresolvedHouse { degree: f64 },

    #[error("ephemeris lookup failed: {0}")]
    Ephemeris(#[from] EphemerisError),

    #[error("subject resolution failed: {0}")]
    Subject(#[from] SubjectError),

    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
