//! House sector geometry: locating degrees within twelve cusp-bounded arcs
//! on the ecliptic circle.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::zodiac::{sign_placement, SignPlacement};

/// House systems are degenerate beyond the polar circles; latitudes past
/// this limit are clamped before cusp computation.
pub const POLAR_LATITUDE_LIMIT: f64 = 66.0;

/// One house: its 1-based number and the sign placement of its cusp degree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub number: u8,
    pub cusp: SignPlacement,
}

/// Whether `degree` lies on the arc from `start` to `end`, travelling
/// counter-clockwise. Start is inclusive, end exclusive. The `<= 180`
/// branch flips the comparison so arcs wider than a semicircle (degenerate
/// polar configurations) classify consistently.
fn arc_contains(start: f64, end: f64, degree: f64) -> bool {
    let span = (end - start).rem_euclid(360.0);
    let offset = (degree - start).rem_euclid(360.0);
    (span <= 180.0) != (offset >= span)
}

/// Locates the house sector containing `degree`.
///
/// `cusps` are ordered from the ascendant; sector `i + 1` runs from
/// `cusps[i]` to `cusps[(i + 1) % 12]`, so the test is wraparound-safe at
/// 0°/360°. A degree exactly on a cusp belongs to the sector starting
/// there, and exactly one sector matches for a well-formed sequence. A
/// sequence matching no sector is malformed and reported as
/// [`ChartError::UnresolvedHouse`].
pub fn locate_house(cusps: &[f64; 12], degree: f64) -> Result<u8, ChartError> {
    for i in 0..12 {
        if arc_contains(cusps[i], cusps[(i + 1) % 12], degree) {
            return Ok(i as u8 + 1);
        }
    }
    Err(ChartError::UnresolvedHouse { degree })
}

/// Builds the twelve house records from their cusp degrees.
pub fn build_houses(cusps: &[f64; 12]) -> Result<Vec<House>, ChartError> {
    cusps
        .iter()
        .enumerate()
        .map(|(i, &cusp)| {
            Ok(House {
                number: i as u8 + 1,
                cusp: sign_placement(cusp)?,
            })
        })
        .collect()
}

/// Presentation label for a house number, e.g. "1st House".
pub fn house_label(number: u8) -> String {
    let suffix = match number {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{}{} House", number, suffix)
}

/// Clamps latitude to the ±66° polar-circle limit, warning when the
/// override fires.
pub fn clamp_polar_latitude(latitude: f64) -> f64 {
    if latitude > POLAR_LATITUDE_LIMIT {
        log::warn!(
            "polar circle override for houses: latitude {} clamped to {}",
            latitude,
            POLAR_LATITUDE_LIMIT
        );
        POLAR_LATITUDE_LIMIT
    } else if latitude < -POLAR_LATITUDE_LIMIT {
        log::warn!(
            "polar circle override for houses: latitude {} clamped to {}",
            latitude,
            -POLAR_LATITUDE_LIMIT
        );
        -POLAR_LATITUDE_LIMIT
    } else {
        latitude
    }
}
