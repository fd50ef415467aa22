//! Chart assembly and configuration.

pub mod assembler;
pub mod settings;

pub use assembler::{ChartAssembler, ChartInput, ChartSnapshot};
pub use settings::ChartSettings;
