//! Plain data shared between the ephemeris boundary and the chart core.

use serde::{Deserialize, Serialize};

/// Geographic coordinates in decimal degrees. North and east positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Raw per-body ephemeris output: ecliptic longitude in [0, 360) and
/// daily motion in degrees, negative while retrograde.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    pub longitude: f64,
    pub speed: f64,
}

/// Reference frame for longitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacType {
    #[default]
    Tropic,
    Sidereal,
}

/// Ayanamsa applied when the zodiac type is sidereal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ayanamsa {
    #[default]
    FaganBradley,
    Lahiri,
}

impl Ayanamsa {
    /// Sidereal mode id understood by the ephemeris backend.
    pub const fn mode(self) -> i32 {
        match self {
            Ayanamsa::FaganBradley => 0,
            Ayanamsa::Lahiri => 1,
        }
    }
}

/// Supported house division schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    WholeSign,
    Koch,
    Equal,
    Regiomontanus,
    Campanus,
}

impl HouseSystem {
    /// Single-letter system code understood by the ephemeris backend.
    pub const fn code(self) -> u8 {
        match self {
            HouseSystem::Placidus => b'P',
            HouseSystem::WholeSign => b'W',
            HouseSystem::Koch => b'K',
            HouseSystem::Equal => b'E',
            HouseSystem::Regiomontanus => b'R',
            HouseSystem::Campanus => b'C',
        }
    }
}

/// Ephemeris configuration, usually read from the settings file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisSettings {
    pub zodiac_type: ZodiacType,
    pub ayanamsa: Ayanamsa,
    pub house_system: HouseSystem,
}
