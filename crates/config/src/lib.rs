//! Shared configuration for quill
//!
//! This crate provides the single source of truth for brush parameters and
//! engine settings. Both are plain serde structs so they can be persisted
//! alongside strokes, and both support partial updates through patch
//! structs instead of ad hoc field merging.

mod brush;
mod color;
mod settings;

pub use brush::{Brush, BrushPatch, InputKind};
pub use color::{ConfigError, parse_hex_color};
pub use settings::{Settings, SettingsPatch};

/// Default brush color
pub const DEFAULT_COLOR: &str = "#ffbe0c";

/// Default brush size (full stroke width at pressure 1)
pub const DEFAULT_SIZE: f32 = 32.0;

/// Default spacing between resampled points, as a fraction of the radius
pub const DEFAULT_SPACING: f32 = 0.15;

/// Default pressure response speed
pub const DEFAULT_SPEED: f32 = 0.62;

/// Default width variation (0 = constant width, 1 = full pressure range)
pub const DEFAULT_VARIATION: f32 = 0.82;

/// Default streamline factor
pub const DEFAULT_STREAMLINE: f32 = 0.5;

/// Default stroke opacity
pub const DEFAULT_OPACITY: f32 = 1.0;

/// Default per-primitive alpha
pub const DEFAULT_ALPHA: f32 = 0.9;

/// Default device pixel ratio
pub const DEFAULT_RESOLUTION: f32 = 1.0;
