//! Chart settings loaded from a TOML file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::aspects::AspectOrbs;
use crate::ephemeris::EphemerisSettings;

/// Everything configurable about chart computation. Every field has a
/// default, so a partial file works.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub ephemeris: EphemerisSettings,
    pub orbs: AspectOrbs,
}

impl ChartSettings {
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read settings file {}: {e}", path.display())
        })?;
        let settings = toml::from_str(&text).map_err(|e| {
            anyhow::anyhow!("Failed to parse settings file {}: {e}", path.display())
        })?;
        Ok(settings)
    }
}
