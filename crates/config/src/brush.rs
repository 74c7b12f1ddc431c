//! Brush configuration

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_ALPHA, DEFAULT_COLOR, DEFAULT_OPACITY, DEFAULT_SIZE, DEFAULT_SPACING, DEFAULT_SPEED,
    DEFAULT_STREAMLINE, DEFAULT_VARIATION,
};

/// Kind of pointer device that produced a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Pen,
    #[default]
    Mouse,
    Touch,
}

impl InputKind {
    /// Whether the device reports real pressure values
    pub fn reports_pressure(self) -> bool {
        matches!(self, InputKind::Pen)
    }
}

/// Brush configuration snapshot
///
/// A session copies the brush when a stroke starts, so later edits never
/// affect an in-progress stroke. Values are assumed pre-validated; use
/// [`Brush::clamped`] at the configuration boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Brush {
    /// Fill color as a hex string (`#rrggbb`)
    pub color: String,
    /// Stroke width at full pressure
    pub size: f32,
    /// Stroke-level opacity 0.0-1.0
    pub opacity: f32,
    /// Per-primitive alpha 0.0-1.0
    pub alpha: f32,
    /// Pressure response speed 0.0-1.0
    pub speed: f32,
    /// Streamline damping 0.0-1.0
    pub streamline: f32,
    /// Width variation 0.0-1.0
    pub variation: f32,
    /// Resample spacing as a fraction of the local radius
    pub spacing: f32,
    /// Positional jitter as a fraction of the size
    pub jitter: f32,
    /// Size jitter as a fraction of the size
    pub size_jitter: f32,
    /// Input device kind of the stroke being drawn
    #[serde(rename = "type")]
    pub input_kind: InputKind,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            size: DEFAULT_SIZE,
            opacity: DEFAULT_OPACITY,
            alpha: DEFAULT_ALPHA,
            speed: DEFAULT_SPEED,
            streamline: DEFAULT_STREAMLINE,
            variation: DEFAULT_VARIATION,
            spacing: DEFAULT_SPACING,
            jitter: 0.0,
            size_jitter: 0.0,
            input_kind: InputKind::default(),
        }
    }
}

impl Brush {
    /// Width at pressure 0
    pub fn min_size(&self) -> f32 {
        self.size * (1.0 - self.variation)
    }

    /// Width at pressure 1
    pub fn max_size(&self) -> f32 {
        self.size
    }

    /// Map a pressure value to a stroke radius
    pub fn radius_for_pressure(&self, pressure: f32) -> f32 {
        let pressure = pressure.clamp(0.0, 1.0);
        self.min_size() + (self.max_size() - self.min_size()) * pressure
    }

    /// Return a copy with every field of `patch` that is set applied
    pub fn with(&self, patch: &BrushPatch) -> Self {
        Self {
            color: patch.color.clone().unwrap_or_else(|| self.color.clone()),
            size: patch.size.unwrap_or(self.size),
            opacity: patch.opacity.unwrap_or(self.opacity),
            alpha: patch.alpha.unwrap_or(self.alpha),
            speed: patch.speed.unwrap_or(self.speed),
            streamline: patch.streamline.unwrap_or(self.streamline),
            variation: patch.variation.unwrap_or(self.variation),
            spacing: patch.spacing.unwrap_or(self.spacing),
            jitter: patch.jitter.unwrap_or(self.jitter),
            size_jitter: patch.size_jitter.unwrap_or(self.size_jitter),
            input_kind: patch.input_kind.unwrap_or(self.input_kind),
        }
    }

    /// Clamp every field into its physically sensible range
    pub fn clamped(&self) -> Self {
        Self {
            color: self.color.clone(),
            size: self.size.max(0.5),
            opacity: self.opacity.clamp(0.0, 1.0),
            alpha: self.alpha.clamp(0.0, 1.0),
            speed: self.speed.clamp(0.0, 1.0),
            streamline: self.streamline.clamp(0.0, 1.0),
            variation: self.variation.clamp(0.0, 1.0),
            spacing: self.spacing.max(0.01), // Prevent zero spacing
            jitter: self.jitter.max(0.0),
            size_jitter: self.size_jitter.max(0.0),
            input_kind: self.input_kind,
        }
    }
}

/// Partial brush update; unset fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrushPatch {
    pub color: Option<String>,
    pub size: Option<f32>,
    pub opacity: Option<f32>,
    pub alpha: Option<f32>,
    pub speed: Option<f32>,
    pub streamline: Option<f32>,
    pub variation: Option<f32>,
    pub spacing: Option<f32>,
    pub jitter: Option<f32>,
    pub size_jitter: Option<f32>,
    #[serde(rename = "type")]
    pub input_kind: Option<InputKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_brush() {
        let brush = Brush::default();
        assert_eq!(brush.color, "#ffbe0c");
        assert_eq!(brush.size, 32.0);
        assert_eq!(brush.spacing, 0.15);
        assert_eq!(brush.speed, 0.62);
        assert_eq!(brush.variation, 0.82);
        assert_eq!(brush.streamline, 0.5);
        assert_eq!(brush.opacity, 1.0);
        assert_eq!(brush.alpha, 0.9);
        assert_eq!(brush.jitter, 0.0);
        assert_eq!(brush.size_jitter, 0.0);
    }

    #[test]
    fn test_radius_for_pressure() {
        let brush = Brush::default();
        assert!((brush.radius_for_pressure(0.0) - 32.0 * 0.18).abs() < 0.001);
        assert!((brush.radius_for_pressure(1.0) - 32.0).abs() < 0.001);
        assert!((brush.radius_for_pressure(0.5) - 18.88).abs() < 0.001);
        // Out-of-range pressure is clamped
        assert!((brush.radius_for_pressure(3.0) - 32.0).abs() < 0.001);
    }

    #[test]
    fn test_with_patch_only_touches_set_fields() {
        let brush = Brush::default();
        let patch = BrushPatch {
            size: Some(12.0),
            jitter: Some(0.3),
            ..Default::default()
        };

        let updated = brush.with(&patch);
        assert_eq!(updated.size, 12.0);
        assert_eq!(updated.jitter, 0.3);
        assert_eq!(updated.color, brush.color);
        assert_eq!(updated.streamline, brush.streamline);

        // Source snapshot is untouched
        assert_eq!(brush.size, 32.0);
    }

    #[test]
    fn test_clamped() {
        let brush = Brush {
            size: -4.0,
            spacing: 0.0,
            streamline: 1.7,
            variation: -0.2,
            jitter: -1.0,
            ..Default::default()
        }
        .clamped();

        assert!(brush.size > 0.0);
        assert!(brush.spacing >= 0.01);
        assert_eq!(brush.streamline, 1.0);
        assert_eq!(brush.variation, 0.0);
        assert_eq!(brush.jitter, 0.0);
    }

    #[test]
    fn test_absent_options_fall_back_to_defaults() {
        let brush: Brush = serde_json::from_str(r#"{"size": 10, "sizeJitter": 0.5}"#).unwrap();
        assert_eq!(brush.size, 10.0);
        assert_eq!(brush.size_jitter, 0.5);
        assert_eq!(brush.spacing, 0.15);
        assert_eq!(brush.input_kind, InputKind::Mouse);
    }

    #[test]
    fn test_input_kind_pressure() {
        assert!(InputKind::Pen.reports_pressure());
        assert!(!InputKind::Mouse.reports_pressure());
        assert!(!InputKind::Touch.reports_pressure());
    }
}
