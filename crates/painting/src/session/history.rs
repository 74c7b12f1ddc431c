//! Re-rendering and undo/redo for the ink session

use tracing::debug;

use crate::render::{Paint, RenderTarget};

use super::{InkSession, SessionEvent, render_stroke, replay};

impl InkSession {
    /// Clear the target and replay every stroke with the current brush
    ///
    /// A stroke in progress is replayed too and continues with the fresh
    /// filter and builder, so it picks up the new brush as well.
    pub fn rerender_all(&mut self, target: &mut dyn RenderTarget) {
        target.clear();
        let paint = Paint::from_brush(&self.brush);

        for stroke in self.strokes.iter() {
            target.draw_all(render_stroke(stroke, &self.brush, &self.settings), paint);
        }

        if let Some(active) = self.active.as_mut() {
            let (filter, builder, primitives) =
                replay(&active.stroke, &self.brush, &self.settings, false);
            active.filter = filter;
            active.builder = builder;
            active.paint = paint;
            target.draw_all(primitives, paint);
        }

        debug!(
            "Re-rendered {} strokes (drawing={})",
            self.strokes.len(),
            self.active.is_some()
        );
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.active.is_none() && self.strokes.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.active.is_none() && self.strokes.can_redo()
    }

    /// Remove the last finished stroke
    ///
    /// Returns true if a stroke was removed. Ignored while drawing.
    pub fn undo(&mut self, target: &mut dyn RenderTarget) -> bool {
        if self.active.is_some() {
            debug!("Undo: stroke in progress, ignoring");
            return false;
        }
        if !self.strokes.undo() {
            debug!("Undo: no strokes available");
            return false;
        }

        self.rerender_all(target);
        let remaining = self.strokes.len();
        self.emit_event(SessionEvent::Undone { remaining });
        true
    }

    /// Restore the most recently undone stroke
    ///
    /// Returns true if a stroke was restored. Ignored while drawing.
    pub fn redo(&mut self, target: &mut dyn RenderTarget) -> bool {
        if self.active.is_some() {
            debug!("Redo: stroke in progress, ignoring");
            return false;
        }
        if !self.strokes.redo() {
            debug!("Redo: nothing to redo");
            return false;
        }

        self.rerender_all(target);
        let count = self.strokes.len();
        self.emit_event(SessionEvent::Redone { count });
        true
    }

    /// Erase every stroke, including one in progress
    pub fn clear(&mut self, target: &mut dyn RenderTarget) {
        self.active = None;
        self.strokes.clear();
        target.clear();
        debug!("Cleared all strokes");
        self.emit_event(SessionEvent::Cleared);
    }
}
