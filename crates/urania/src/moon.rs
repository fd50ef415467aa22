//! Lunar phase from the sun-moon separation angle.

use serde::{Deserialize, Serialize};

use crate::zodiac::normalize_degrees;

const PHASE_STEP: f64 = 360.0 / 28.0;

/// Lower bounds of the 28 sun-phase buckets. The buckets are irregular:
/// tight near the quarters, wide across the gibbous stretches.
const SUN_PHASE_STEPS: [f64; 28] = [
    0.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 120.0, 130.0, 140.0, 150.0, 160.0, 170.0,
    180.0, 210.0, 220.0, 230.0, 240.0, 250.0, 260.0, 270.0, 300.0, 310.0, 320.0, 330.0, 340.0,
    350.0,
];

/// Lunar phase derived from the two luminaries' longitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarPhase {
    /// Moon's longitude minus the sun's, normalized to [0, 360).
    pub separation: f64,
    /// 1-based index into 28 equal-width phase buckets.
    pub moon_phase: u8,
    /// 1-based index into the 28 irregular sun-phase buckets.
    pub sun_phase: u8,
    pub glyph: String,
}

/// Computes the lunar phase for the given sun and moon ecliptic longitudes.
pub fn lunar_phase(sun_degree: f64, moon_degree: f64) -> LunarPhase {
    let separation = normalize_degrees(moon_degree - sun_degree);
    let moon_phase = moon_phase_index(separation);
    LunarPhase {
        separation,
        moon_phase,
        sun_phase: sun_phase_index(separation),
        glyph: moon_glyph(moon_phase).to_string(),
    }
}

/// Equal 360/28-degree half-open buckets, except that exact opposition
/// counts as the full-moon bucket.
fn moon_phase_index(separation: f64) -> u8 {
    if separation == 180.0 {
        return 14;
    }
    (separation / PHASE_STEP) as u8 + 1
}

fn sun_phase_index(separation: f64) -> u8 {
    for x in 0..28 {
        let low = SUN_PHASE_STEPS[x];
        let high = if x == 27 { 360.0 } else { SUN_PHASE_STEPS[x + 1] };
        if separation >= low && separation < high {
            return x as u8 + 1;
        }
    }
    28
}

fn moon_glyph(phase: u8) -> &'static str {
    if phase == 1 {
        "🌑"
    } else if phase == 14 {
        "🌕"
    } else if (7..=9).contains(&phase) {
        "🌓"
    } else if (20..=22).contains(&phase) {
        "🌗"
    } else if phase < 7 {
        "🌒"
    } else if phase < 14 {
        "🌔"
    } else {
        "🌘"
    }
}
