//! Engine settings

use serde::{Deserialize, Serialize};

use crate::DEFAULT_RESOLUTION;

/// Engine-wide settings that affect how strokes are synthesized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Device pixel ratio; outline coordinates are divided by it
    pub resolution: f32,
    /// Re-render every stroke when the brush or settings change
    pub rerender_marks: bool,
    /// Derive pressure from speed for devices without pressure
    pub simulate_pressure: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            rerender_marks: true,
            simulate_pressure: true,
        }
    }
}

impl Settings {
    /// Return a copy with every field of `patch` that is set applied
    pub fn with(&self, patch: &SettingsPatch) -> Self {
        Self {
            resolution: patch.resolution.unwrap_or(self.resolution),
            rerender_marks: patch.rerender_marks.unwrap_or(self.rerender_marks),
            simulate_pressure: patch.simulate_pressure.unwrap_or(self.simulate_pressure),
        }
    }
}

/// Partial settings update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub resolution: Option<f32>,
    pub rerender_marks: Option<bool>,
    pub simulate_pressure: Option<bool>,
}
