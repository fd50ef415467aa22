//! Celestial bodies tracked by the chart and their computed positions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::ephemeris::BodyState;
use crate::houses::locate_house;
use crate::zodiac::{sign_placement, SignPlacement};

/// The twelve tracked points, in ephemeris order. Discriminants double as
/// ephemeris body ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelestialBody {
    Sun = 0,
    Moon = 1,
    Mercury = 2,
    Venus = 3,
    Mars = 4,
    Jupiter = 5,
    Saturn = 6,
    Uranus = 7,
    Neptune = 8,
    Pluto = 9,
    MeanNode = 10,
    TrueNode = 11,
}

impl CelestialBody {
    pub const ALL: [CelestialBody; 12] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Uranus,
        CelestialBody::Neptune,
        CelestialBody::Pluto,
        CelestialBody::MeanNode,
        CelestialBody::TrueNode,
    ];

    /// Body id passed to the ephemeris backend.
    pub const fn ephemeris_id(self) -> i32 {
        self as i32
    }

    /// Position of this body within [`CelestialBody::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            CelestialBody::Sun => "Sun",
            CelestialBody::Moon => "Moon",
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Venus => "Venus",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Saturn => "Saturn",
            CelestialBody::Uranus => "Uranus",
            CelestialBody::Neptune => "Neptune",
            CelestialBody::Pluto => "Pluto",
            CelestialBody::MeanNode => "Mean Node",
            CelestialBody::TrueNode => "True Node",
        }
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A body's fully derived chart position: sign placement, house number,
/// and motion flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyPosition {
    pub body: CelestialBody,
    #[serde(flatten)]
    pub placement: SignPlacement,
    pub house: u8,
    pub retrograde: bool,
    pub speed: f64,
}

/// Derives a [`BodyPosition`] from raw ephemeris state and the house cusps.
///
/// Retrograde means strictly negative daily motion; a stationary body is
/// direct.
pub fn build_position(
    body: CelestialBody,
    state: BodyState,
    cusps: &[f64; 12],
) -> Result<BodyPosition, ChartError> {
    let placement = sign_placement(state.longitude)?;
    let house = locate_house(cusps, state.longitude)?;
    Ok(BodyPosition {
        body,
        placement,
        house,
        retrograde: state.speed < 0.0,
        speed: state.speed,
    })
}
