//! Chart assembly: from raw ephemeris state to an immutable snapshot.

use serde::{Deserialize, Serialize};

use crate::bodies::{build_position, BodyPosition, CelestialBody};
use crate::ephemeris::{BodyState, EphemerisSource, GeoLocation};
use crate::error::ChartError;
use crate::houses::{build_houses, clamp_polar_latitude, House};
use crate::moon::{lunar_phase, LunarPhase};

/// Raw inputs for one chart: a moment, a place, and that moment's twelve
/// body states and twelve house cusps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInput {
    pub julian_day: f64,
    pub location: GeoLocation,
    pub bodies: [BodyState; 12],
    pub cusps: [f64; 12],
}

/// A fully computed chart. Assembly is the only construction path; the
/// snapshot never changes afterwards, so recomputing from the same input
/// reproduces it exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSnapshot {
    pub julian_day: f64,
    pub location: GeoLocation,
    pub bodies: Vec<BodyPosition>,
    pub houses: Vec<House>,
    pub lunar_phase: LunarPhase,
}

impl ChartSnapshot {
    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string(self)?)
    }
}

pub struct ChartAssembler;

impl ChartAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Derives the snapshot from already-fetched ephemeris state.
    pub fn assemble(&self, input: &ChartInput) -> Result<ChartSnapshot, ChartError> {
        let houses = build_houses(&input.cusps)?;
        let bodies = CelestialBody::ALL
            .iter()
            .map(|&body| build_position(body, input.bodies[body.index()], &input.cusps))
            .collect::<Result<Vec<_>, _>>()?;

        let sun = input.bodies[CelestialBody::Sun.index()].longitude;
        let moon = input.bodies[CelestialBody::Moon.index()].longitude;

        Ok(ChartSnapshot {
            julian_day: input.julian_day,
            location: input.location,
            bodies,
            houses,
            lunar_phase: lunar_phase(sun, moon),
        })
    }

    /// Fetches state from the source and assembles the snapshot. Polar
    /// latitudes are clamped once, here, before the cusp query.
    pub fn compute(
        &self,
        source: &dyn EphemerisSource,
        julian_day: f64,
        location: GeoLocation,
    ) -> Result<ChartSnapshot, ChartError> {
        let location = GeoLocation {
            lat: clamp_polar_latitude(location.lat),
            lon: location.lon,
        };

        let mut bodies = [BodyState::default(); 12];
        for body in CelestialBody::ALL {
            bodies[body.index()] = source.body_state(julian_day, body)?;
        }
        let cusps = source.house_cusps(julian_day, &location)?;

        self.assemble(&ChartInput {
            julian_day,
            location,
            bodies,
            cusps,
        })
    }
}

impl Default for ChartAssembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::ZodiacSign;

    const EQUAL_CUSPS: [f64; 12] = [
        0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0,
    ];

    fn input() -> ChartInput {
        let mut bodies = [BodyState::default(); 12];
        for (i, state) in bodies.iter_mut().enumerate() {
            *state = BodyState {
                longitude: i as f64 * 25.0,
                speed: 1.0,
            };
        }
        bodies[CelestialBody::Moon.index()] = BodyState {
            longitude: 180.0,
            speed: 13.0,
        };
        ChartInput {
            julian_day: 2451545.0,
            location: GeoLocation { lat: 41.9, lon: 12.48 },
            bodies,
            cusps: EQUAL_CUSPS,
        }
    }

    #[test]
    fn snapshot_covers_all_bodies_and_houses() {
        let snapshot = ChartAssembler::new().assemble(&input()).unwrap();
        assert_eq!(snapshot.bodies.len(), 12);
        assert_eq!(snapshot.houses.len(), 12);
        assert_eq!(snapshot.bodies[0].body, CelestialBody::Sun);
        assert_eq!(snapshot.bodies[0].placement.sign, ZodiacSign::Aries);
    }

    #[test]
    fn lunar_phase_reads_the_two_luminaries() {
        let snapshot = ChartAssembler::new().assemble(&input()).unwrap();
        // Sun at 0, moon at 180.
        assert_eq!(snapshot.lunar_phase.separation, 180.0);
        assert_eq!(snapshot.lunar_phase.moon_phase, 14);
    }

    #[test]
    fn bad_cusp_fails_the_whole_assembly() {
        let mut bad = input();
        bad.cusps[3] = -5.0;
        assert!(matches!(
            ChartAssembler::new().assemble(&bad),
            Err(ChartError::DegreeOutOfRange { .. })
        ));
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let snapshot = ChartAssembler::new().assemble(&input()).unwrap();
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"julianDay\":2451545.0"));
        assert!(json.contains("\"lunarPhase\""));
        assert!(json.contains("\"moonPhase\":14"));
    }
}
