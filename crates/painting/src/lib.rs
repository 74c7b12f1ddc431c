//! Quill painting core - stroke synthesis and outline geometry
//!
//! This crate turns raw pointer samples into renderable ink strokes:
//! - [`math`] - 2D vector helpers and quadratic Bezier evaluation
//! - [`geometry`] - Circle tangents, circumcircles, splines and simplification
//! - [`filter`] - Streamlining, pressure smoothing, jitter and resampling
//! - [`outline`] - Incremental stroke-to-outline primitive construction
//! - [`render`] - Draw commands and the render target seam
//! - [`session`] - Stroke lifecycle, re-rendering and undo/redo
//! - [`persist`] - Saved documents and storage backends
//! - [`types`] - Samples, strokes and the stroke collection

pub mod constants;
pub mod filter;
pub mod geometry;
pub mod math;
pub mod outline;
pub mod persist;
pub mod render;
pub mod session;
pub mod types;

pub use filter::{StrokeFilter, filter_samples};
pub use outline::{Edge, OutlineBuilder, Primitive, build_outline};
pub use persist::{Document, DocumentStore, FileStore, PersistError, load_or_default};
pub use render::{DrawCommand, Paint, RecordingTarget, RenderTarget};
pub use session::{InkSession, SessionEvent, render_stroke};
pub use types::*;

pub use quill_config::{Brush, BrushPatch, InputKind, Settings, SettingsPatch};
