//! Stroke handling for the ink session

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::filter::StrokeFilter;
use crate::outline::OutlineBuilder;
use crate::render::{Paint, RenderTarget};
use crate::types::{Sample, Stroke};

use super::{ActiveStroke, InkSession, SessionEvent};

impl ActiveStroke {
    /// Run one sample through filter and builder, drawing what it adds
    fn feed(&mut self, target: &mut dyn RenderTarget, sample: Sample, is_last: bool) {
        self.stroke.points.push(sample);
        let mut primitives = Vec::new();
        for centerline in self.filter.add_sample(sample, is_last) {
            primitives.extend(self.builder.add_point(centerline));
        }
        if is_last {
            primitives.extend(self.builder.finish());
        }
        target.draw_all(primitives, self.paint);
    }
}

impl InkSession {
    /// Begin a stroke at `sample` with a snapshot of the current brush
    ///
    /// A stroke already in progress is cancelled first.
    pub fn start(&mut self, target: &mut dyn RenderTarget, sample: Sample) {
        if self.active.is_some() {
            warn!("start: stroke already in progress, cancelling it");
            self.cancel(target);
        }

        let seed = self.next_seed();
        let brush = self.brush.clone();
        let input_kind = brush.input_kind;

        let mut active = ActiveStroke {
            stroke: Stroke::new(input_kind, seed),
            paint: Paint::from_brush(&brush),
            filter: StrokeFilter::new(brush, self.settings.clone(), StdRng::seed_from_u64(seed)),
            builder: OutlineBuilder::new(&self.settings),
        };
        active.feed(target, sample, false);
        self.active = Some(active);

        debug!(
            "Started stroke at ({:.1}, {:.1}), seed={}",
            sample.x, sample.y, seed
        );
        self.emit_event(SessionEvent::StrokeStarted { seed, input_kind });
    }

    /// Continue the stroke with one more sample
    pub fn update(&mut self, target: &mut dyn RenderTarget, sample: Sample) {
        let Some(active) = self.active.as_mut() else {
            debug!("update: no active stroke, ignoring");
            return;
        };
        active.feed(target, sample, false);
    }

    /// End the stroke at the release point and store it
    pub fn finish(&mut self, target: &mut dyn RenderTarget, sample: Sample) {
        let Some(mut active) = self.active.take() else {
            debug!("finish: no active stroke, ignoring");
            return;
        };
        active.feed(target, sample, true);

        let point_count = active.stroke.points.len();
        self.strokes.push(active.stroke);
        let index = self.strokes.len() - 1;

        info!("Finished stroke {} ({} points)", index, point_count);
        self.emit_event(SessionEvent::StrokeFinished { index, point_count });
    }

    /// Discard the stroke in progress
    ///
    /// Its partial primitives are removed by re-rendering the finished
    /// strokes.
    pub fn cancel(&mut self, target: &mut dyn RenderTarget) {
        let Some(active) = self.active.take() else {
            debug!("cancel: no active stroke, ignoring");
            return;
        };
        let point_count = active.stroke.points.len();
        self.rerender_all(target);

        debug!("Cancelled stroke ({} points)", point_count);
        self.emit_event(SessionEvent::StrokeCancelled { point_count });
    }

    /// Check if a stroke is currently in progress
    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }
}
