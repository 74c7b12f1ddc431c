//! Stroke session manager
//!
//! This module connects:
//! - Input handling (start / update / finish / cancel calls)
//! - The stroke point filter (centerline samples)
//! - The outline builder (drawing primitives)
//! - A caller-supplied render target
//! - The finished-stroke collection with undo/redo
//!
//! The session owns no geometry of its own; everything it draws can be
//! recomputed with [`render_stroke`].

mod events;
mod history;
mod stroke;

use quill_config::{Brush, BrushPatch, Settings, SettingsPatch};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::filter::StrokeFilter;
use crate::outline::{OutlineBuilder, Primitive};
use crate::persist::Document;
use crate::render::{Paint, RenderTarget};
use crate::types::{Stroke, StrokeCollection};

pub use events::SessionEvent;

type Listener = Box<dyn FnMut(&SessionEvent) + Send>;

/// The stroke being drawn
pub(crate) struct ActiveStroke {
    pub(crate) stroke: Stroke,
    pub(crate) filter: StrokeFilter<StdRng>,
    pub(crate) builder: OutlineBuilder,
    pub(crate) paint: Paint,
}

/// Drawing session: one active stroke at most, plus the finished strokes
///
/// Input flows in via [`start`](Self::start), [`update`](Self::update) and
/// [`finish`](Self::finish). Each call draws only the primitives it adds;
/// [`rerender_all`](Self::rerender_all) clears the target and replays
/// every stroke with the current brush.
pub struct InkSession {
    pub(crate) brush: Brush,
    pub(crate) settings: Settings,
    pub(crate) strokes: StrokeCollection,
    pub(crate) active: Option<ActiveStroke>,
    /// Source of per-stroke jitter seeds
    pub(crate) seeds: StdRng,
    pub(crate) listeners: Vec<Listener>,
}

impl std::fmt::Debug for InkSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InkSession")
            .field("brush", &self.brush)
            .field("settings", &self.settings)
            .field("stroke_count", &self.strokes.len())
            .field("drawing", &self.is_drawing())
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}

impl Default for InkSession {
    fn default() -> Self {
        Self::new(Brush::default(), Settings::default())
    }
}

impl InkSession {
    /// Create a session with entropy-seeded stroke seeds
    pub fn new(brush: Brush, settings: Settings) -> Self {
        Self::with_rng(brush, settings, StdRng::from_os_rng())
    }

    /// Create a session whose stroke seeds are reproducible
    pub fn with_seed(brush: Brush, settings: Settings, seed: u64) -> Self {
        Self::with_rng(brush, settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(brush: Brush, settings: Settings, seeds: StdRng) -> Self {
        Self {
            brush,
            settings,
            strokes: StrokeCollection::new(),
            active: None,
            seeds,
            listeners: Vec::new(),
        }
    }

    /// Restore a saved document. Call [`rerender_all`](Self::rerender_all)
    /// to draw it.
    pub fn from_document(document: Document) -> Self {
        let mut session = Self::new(document.brush, document.settings);
        session.strokes = StrokeCollection::from_strokes(document.strokes);
        info!("Restored session with {} strokes", session.strokes.len());
        session
    }

    /// Snapshot of the brush, settings and finished strokes
    pub fn to_document(&self) -> Document {
        Document::new(
            self.brush.clone(),
            self.settings.clone(),
            self.strokes.as_slice().to_vec(),
        )
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Finished strokes in drawing order
    pub fn strokes(&self) -> &StrokeCollection {
        &self.strokes
    }

    /// Apply a partial brush update
    ///
    /// The in-progress stroke keeps its snapshot unless the change triggers
    /// a re-render.
    pub fn set_brush(&mut self, target: &mut dyn RenderTarget, patch: &BrushPatch) {
        self.brush = self.brush.with(patch);
        self.restyle(target);
    }

    /// Apply a partial settings update
    pub fn set_settings(&mut self, target: &mut dyn RenderTarget, patch: &SettingsPatch) {
        self.settings = self.settings.with(patch);
        self.restyle(target);
    }

    /// Restore the default brush, keeping the current input kind
    pub fn reset_brush(&mut self, target: &mut dyn RenderTarget) {
        self.brush = Brush {
            input_kind: self.brush.input_kind,
            ..Brush::default()
        };
        self.restyle(target);
    }

    fn restyle(&mut self, target: &mut dyn RenderTarget) {
        let rerendered = self.settings.rerender_marks;
        if rerendered {
            self.rerender_all(target);
        }
        debug!("Restyled session (rerendered={})", rerendered);
        self.emit_event(SessionEvent::Restyled { rerendered });
    }

    /// Register a lifecycle event listener
    pub fn add_event_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&SessionEvent) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub(crate) fn emit_event(&mut self, event: SessionEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    pub(crate) fn next_seed(&mut self) -> u64 {
        self.seeds.random()
    }
}

/// The brush a stroke is rendered with: the current brush, on the stroke's
/// own input device
pub(crate) fn stroke_brush(brush: &Brush, stroke: &Stroke) -> Brush {
    Brush {
        input_kind: stroke.input_kind,
        ..brush.clone()
    }
}

/// Replay a stroke through a fresh filter and builder
///
/// With `finish` set, the last point is fed as the release point and the
/// outline is closed. Otherwise the returned filter and builder can keep
/// consuming samples.
pub(crate) fn replay(
    stroke: &Stroke,
    brush: &Brush,
    settings: &Settings,
    finish: bool,
) -> (StrokeFilter<StdRng>, OutlineBuilder, Vec<Primitive>) {
    let mut filter = StrokeFilter::new(
        stroke_brush(brush, stroke),
        settings.clone(),
        StdRng::seed_from_u64(stroke.seed),
    );
    let mut builder = OutlineBuilder::new(settings);
    let mut primitives = Vec::new();

    let last = stroke.points.len().saturating_sub(1);
    for (i, sample) in stroke.points.iter().enumerate() {
        for centerline in filter.add_sample(*sample, finish && i == last) {
            primitives.extend(builder.add_point(centerline));
        }
    }
    if finish {
        primitives.extend(builder.finish());
    }

    (filter, builder, primitives)
}

/// Outline of a finished stroke drawn with `brush` and `settings`
///
/// Pure: the same stroke, brush and settings always give the same
/// primitives, jitter included.
pub fn render_stroke(stroke: &Stroke, brush: &Brush, settings: &Settings) -> Vec<Primitive> {
    replay(stroke, brush, settings, true).2
}
