//! Aspect detection between chart bodies.

pub mod calculator;
pub mod types;

pub use calculator::AspectCalculator;
pub use types::{Aspect, AspectKind, AspectOrbs};
