//! Stroke point filter
//!
//! Turns sparse, irregular pointer samples into an evenly spaced,
//! pressure-smoothed sequence of centerline samples. One filter instance
//! serves one stroke.

use glam::Vec2;
use quill_config::{Brush, Settings};
use rand::Rng;
use tracing::debug;

use crate::constants::{MAX_SEGMENT_SAMPLES, MIN_MOVE_DISTANCE, MIN_RADIUS, MIN_SPACING_STEP};
use crate::math::{lerp, lerp_vec};
use crate::types::{CenterlineSample, Sample};

/// Last accepted point of the stroke
#[derive(Debug, Clone, Copy)]
struct Anchor {
    position: Vec2,
    pressure: f32,
}

/// Incremental point filter for a single stroke
///
/// The random source drives jitter only; with `jitter` and `size_jitter`
/// at zero it is never consulted.
pub struct StrokeFilter<R: Rng> {
    brush: Brush,
    settings: Settings,
    rng: R,
    /// Previous centerline anchor (None before the first sample)
    previous: Option<Anchor>,
    /// Distance from the previous anchor to the next resampled point
    travel_error: f32,
    finished: bool,
}

impl<R: Rng> StrokeFilter<R> {
    /// Create a filter for a new stroke
    pub fn new(brush: Brush, settings: Settings, rng: R) -> Self {
        Self {
            brush,
            settings,
            rng,
            previous: None,
            travel_error: 0.0,
            finished: false,
        }
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Whether the final sample has been consumed
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current smoothed pressure, if the stroke has started
    pub fn pressure(&self) -> Option<f32> {
        self.previous.map(|anchor| anchor.pressure)
    }

    /// Feed one raw sample and return the centerline samples it produces
    ///
    /// The final sample (`is_last`) is emitted exactly where the pointer was
    /// released: no streamline, distance gate, jitter or resampling.
    pub fn add_sample(&mut self, raw: Sample, is_last: bool) -> Vec<CenterlineSample> {
        if self.finished {
            debug!("StrokeFilter::add_sample: stroke already finished, ignoring");
            return Vec::new();
        }
        self.finished = is_last;

        let raw_pressure = raw.pressure.clamp(0.0, 1.0);

        // First sample in stroke - emit immediately
        let Some(previous) = self.previous else {
            let radius = self.radius_for(raw_pressure);
            self.previous = Some(Anchor {
                position: raw.position(),
                pressure: raw_pressure,
            });
            self.travel_error = self.step_for(radius);

            debug!(
                "StrokeFilter::add_sample: FIRST sample at ({:.1}, {:.1}), radius={:.2}",
                raw.x, raw.y, radius
            );
            return vec![CenterlineSample::new(raw.x, raw.y, radius)];
        };

        let mut position = raw.position();
        if !is_last {
            position = lerp_vec(previous.position, position, 1.0 - self.brush.streamline);
        }

        let distance = position.distance(previous.position);
        if !is_last && distance < MIN_MOVE_DISTANCE {
            return Vec::new();
        }

        let target = self.target_pressure(raw_pressure, distance);
        let pressure = self.smooth_pressure(previous.pressure, target);
        self.previous = Some(Anchor { position, pressure });

        if is_last {
            let radius = self.radius_for(pressure);
            debug!(
                "StrokeFilter::add_sample: LAST sample at ({:.1}, {:.1}), radius={:.2}",
                position.x, position.y, radius
            );
            return vec![CenterlineSample::new(position.x, position.y, radius)];
        }

        self.resample(previous, Anchor { position, pressure }, distance)
    }

    /// Pressure the stroke is heading toward before smoothing
    fn target_pressure(&self, raw_pressure: f32, distance: f32) -> f32 {
        if self.brush.input_kind.reports_pressure() || !self.settings.simulate_pressure {
            return raw_pressure;
        }
        // Faster motion draws a thinner line
        1.0 - (distance / self.brush.size).min(1.0)
    }

    /// Thicken slowly (speed squared), thin quickly (speed)
    fn smooth_pressure(&self, previous: f32, target: f32) -> f32 {
        let strength = if target > previous {
            self.brush.speed * self.brush.speed
        } else {
            self.brush.speed
        };
        lerp(previous, target, strength).clamp(0.0, 1.0)
    }

    fn radius_for(&self, pressure: f32) -> f32 {
        if !self.brush.input_kind.reports_pressure() && !self.settings.simulate_pressure {
            return self.brush.size;
        }
        self.brush.radius_for_pressure(pressure)
    }

    fn step_for(&self, radius: f32) -> f32 {
        (radius * self.brush.spacing).max(MIN_SPACING_STEP)
    }

    /// Walk from `from` to `to`, emitting a sample every `radius * spacing`
    ///
    /// The step never drops below `distance / MAX_SEGMENT_SAMPLES`, so the
    /// walk always advances in f32 and stays bounded for huge moves.
    fn resample(&mut self, from: Anchor, to: Anchor, distance: f32) -> Vec<CenterlineSample> {
        let mut samples = Vec::new();
        let mut travelled = self.travel_error;
        let min_step = distance / MAX_SEGMENT_SAMPLES as f32;

        while travelled <= distance {
            let t = if distance > 0.0 { travelled / distance } else { 0.0 };
            let position = lerp_vec(from.position, to.position, t);
            let pressure = lerp(from.pressure, to.pressure, t);
            let radius = self.radius_for(pressure);

            let (jx, jy, js) = self.jitter();
            samples.push(CenterlineSample::new(
                position.x + jx,
                position.y + jy,
                (radius + js).max(MIN_RADIUS),
            ));

            travelled += self.step_for(radius).max(min_step);
        }

        // Carry the overshoot so spacing stays continuous across calls
        self.travel_error = travelled - distance;

        if !samples.is_empty() {
            debug!(
                "StrokeFilter::resample: {} samples from ({:.1}, {:.1}) to ({:.1}, {:.1})",
                samples.len(),
                from.position.x,
                from.position.y,
                to.position.x,
                to.position.y
            );
        }

        samples
    }

    /// Positional and size jitter for one emitted sample
    fn jitter(&mut self) -> (f32, f32, f32) {
        let half = self.brush.size / 2.0;
        let positional = self.brush.jitter * half;
        let size = self.brush.size_jitter * half;

        let (mut jx, mut jy, mut js) = (0.0, 0.0, 0.0);
        if positional > 0.0 {
            jx = lerp(-positional, positional, self.rng.random::<f32>());
            jy = lerp(-positional, positional, self.rng.random::<f32>());
        }
        if size > 0.0 {
            js = lerp(-size, size, self.rng.random::<f32>());
        }
        (jx, jy, js)
    }
}

/// Run a complete list of raw samples through a fresh filter
pub fn filter_samples<R: Rng>(
    samples: &[Sample],
    brush: &Brush,
    settings: &Settings,
    rng: R,
) -> Vec<CenterlineSample> {
    let mut filter = StrokeFilter::new(brush.clone(), settings.clone(), rng);
    let last = samples.len().saturating_sub(1);
    samples
        .iter()
        .enumerate()
        .flat_map(|(i, sample)| filter.add_sample(*sample, i == last))
        .collect()
}
