//! Pairwise aspect search over computed body positions.

use crate::aspects::types::{Aspect, AspectKind, AspectOrbs};
use crate::bodies::BodyPosition;

pub struct AspectCalculator;

impl AspectCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Finds every aspect among the given positions, visiting each
    /// unordered pair once. The orb windows of the recognized kinds do not
    /// overlap, so a pair matches at most one kind.
    pub fn find_aspects(&self, positions: &[BodyPosition], orbs: &AspectOrbs) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                if let Some(aspect) = self.match_pair(&positions[i], &positions[j], orbs) {
                    aspects.push(aspect);
                }
            }
        }
        aspects
    }

    fn match_pair(
        &self,
        first: &BodyPosition,
        second: &BodyPosition,
        orbs: &AspectOrbs,
    ) -> Option<Aspect> {
        let lon1 = first.placement.absolute_degree;
        let lon2 = second.placement.absolute_degree;

        let raw_diff = (lon1 - lon2).abs();
        let angle = if raw_diff > 180.0 {
            360.0 - raw_diff
        } else {
            raw_diff
        };

        for kind in AspectKind::ALL {
            let orb = (angle - kind.angle()).abs();
            if orb <= orbs.orb_for(kind) {
                return Some(Aspect {
                    first: first.body,
                    second: second.body,
                    kind,
                    angle,
                    orb,
                    applying: is_applying(
                        lon1,
                        lon2,
                        first.speed,
                        second.speed,
                        kind.angle(),
                        angle,
                    ),
                });
            }
        }

        None
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the pair is closing on the exact angle, judged by projecting
/// the relative motion a tenth of a day forward.
fn is_applying(
    lon1: f64,
    lon2: f64,
    speed1: f64,
    speed2: f64,
    exact: f64,
    current_angle: f64,
) -> bool {
    let relative_speed = speed1 - speed2;

    // Near-equal speeds give no reliable direction; lean on proximity.
    if relative_speed.abs() < 0.01 {
        return current_angle < exact + 0.5;
    }

    let mut signed_diff = lon1 - lon2;
    if signed_diff > 180.0 {
        signed_diff -= 360.0;
    } else if signed_diff < -180.0 {
        signed_diff += 360.0;
    }

    let current_distance = (current_angle - exact).abs();

    let mut future_diff = signed_diff + relative_speed * 0.1;
    if future_diff > 180.0 {
        future_diff -= 360.0;
    } else if future_diff < -180.0 {
        future_diff += 360.0;
    }

    (future_diff.abs() - exact).abs() < current_distance
}
