//! Aspect vocabulary and orb configuration.

use serde::{Deserialize, Serialize};

use crate::bodies::CelestialBody;

/// The recognized aspect angles, major and minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AspectKind {
    Conjunction,
    SemiSextile,
    SemiSquare,
    Sextile,
    Quintile,
    Square,
    Trine,
    Sesquiquadrate,
    Biquintile,
    Quincunx,
    Opposition,
}

impl AspectKind {
    /// All kinds in ascending angle order.
    pub const ALL: [AspectKind; 11] = [
        AspectKind::Conjunction,
        AspectKind::SemiSextile,
        AspectKind::SemiSquare,
        AspectKind::Sextile,
        AspectKind::Quintile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Sesquiquadrate,
        AspectKind::Biquintile,
        AspectKind::Quincunx,
        AspectKind::Opposition,
    ];

    /// Exact angle of this aspect in degrees.
    pub const fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::SemiSextile => 30.0,
            AspectKind::SemiSquare => 45.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Quintile => 72.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Sesquiquadrate => 135.0,
            AspectKind::Biquintile => 144.0,
            AspectKind::Quincunx => 150.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub const fn is_major(self) -> bool {
        matches!(
            self,
            AspectKind::Conjunction
                | AspectKind::Sextile
                | AspectKind::Square
                | AspectKind::Trine
                | AspectKind::Opposition
        )
    }
}

/// Maximum deviation from exact, in degrees, per aspect kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AspectOrbs {
    pub conjunction: f64,
    pub semi_sextile: f64,
    pub semi_square: f64,
    pub sextile: f64,
    pub quintile: f64,
    pub square: f64,
    pub trine: f64,
    pub sesquiquadrate: f64,
    pub biquintile: f64,
    pub quincunx: f64,
    pub opposition: f64,
}

impl Default for AspectOrbs {
    fn default() -> Self {
        Self {
            conjunction: 10.0,
            semi_sextile: 1.0,
            semi_square: 1.0,
            sextile: 6.0,
            quintile: 1.0,
            square: 5.0,
            trine: 8.0,
            sesquiquadrate: 1.0,
            biquintile: 1.0,
            quincunx: 1.0,
            opposition: 10.0,
        }
    }
}

impl AspectOrbs {
    pub fn orb_for(&self, kind: AspectKind) -> f64 {
        match kind {
            AspectKind::Conjunction => self.conjunction,
            AspectKind::SemiSextile => self.semi_sextile,
            AspectKind::SemiSquare => self.semi_square,
            AspectKind::Sextile => self.sextile,
            AspectKind::Quintile => self.quintile,
            AspectKind::Square => self.square,
            AspectKind::Trine => self.trine,
            AspectKind::Sesquiquadrate => self.sesquiquadrate,
            AspectKind::Biquintile => self.biquintile,
            AspectKind::Quincunx => self.quincunx,
            AspectKind::Opposition => self.opposition,
        }
    }
}

/// A matched aspect between two chart bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aspect {
    pub first: CelestialBody,
    pub second: CelestialBody,
    pub kind: AspectKind,
    /// Actual angular separation, folded to [0, 180].
    pub angle: f64,
    /// Deviation from the exact aspect angle.
    pub orb: f64,
    pub applying: bool,
}
