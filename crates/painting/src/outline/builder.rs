//! Incremental outline builder.

use glam::Vec2;
use quill_config::Settings;
use tracing::trace;

use super::Primitive;
use super::chunk::curve_chunk;
use crate::constants::EPSILON;
use crate::geometry::{Circle, outer_tangents};
use crate::math::{midpoint, perpendicular, unit};
use crate::types::CenterlineSample;

/// Turns centerline samples into drawing primitives as they arrive.
///
/// Each call to [`add_point`](Self::add_point) returns only the new
/// primitives; earlier output is never revised. The builder keeps a
/// sliding window of the last three samples plus the accumulated outline
/// vertices for each side.
///
/// A sample's `radius` is the full local stroke width, so every piece of
/// a stroke body sits `radius / 2` either side of the centerline. Output
/// starts once three samples have arrived; shorter strokes are drawn by
/// [`finish`](Self::finish): a lone sample as a dot of the full radius,
/// two samples as one tangent seam.
#[derive(Debug, Clone)]
pub struct OutlineBuilder {
    scale: f32,
    window: Vec<CenterlineSample>,
    count: usize,
    /// End of the most recent curve chunk, where the closing seam starts
    tail: Option<Vec2>,
    left: Vec<Vec2>,
    right: Vec<Vec2>,
    finished: bool,
}

impl OutlineBuilder {
    pub fn new(settings: &Settings) -> Self {
        let scale = if settings.resolution > EPSILON {
            1.0 / settings.resolution
        } else {
            1.0
        };
        Self {
            scale,
            window: Vec::with_capacity(3),
            count: 0,
            tail: None,
            left: Vec::new(),
            right: Vec::new(),
            finished: false,
        }
    }

    /// Number of samples consumed so far
    pub fn sample_count(&self) -> usize {
        self.count
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Consume one centerline sample and return the primitives it adds
    pub fn add_point(&mut self, sample: CenterlineSample) -> Vec<Primitive> {
        if self.finished {
            trace!("outline already finished, sample ignored");
            return Vec::new();
        }

        let sample = CenterlineSample::new(
            sample.x * self.scale,
            sample.y * self.scale,
            sample.radius * self.scale,
        );

        if self.window.len() == 3 {
            self.window.remove(0);
        }
        self.window.push(sample);
        self.count += 1;

        if self.count < 3 {
            return Vec::new();
        }
        self.chunk()
    }

    /// Close the outline and return the primitives that completes it
    pub fn finish(&mut self) -> Vec<Primitive> {
        if self.finished {
            return Vec::new();
        }
        self.finished = true;

        match self.count {
            0 => Vec::new(),
            1 => {
                let dot = self.window[0];
                vec![Primitive::Circle {
                    center: dot.position(),
                    radius: dot.radius,
                }]
            }
            2 => self.seam(),
            _ => self.closing_seam(),
        }
    }

    /// Closed outline polygon: left side forward, then right side backward
    pub fn outline(&self) -> Vec<Vec2> {
        self.left
            .iter()
            .chain(self.right.iter().rev())
            .copied()
            .collect()
    }

    /// Tangent seam of a two-sample stroke
    ///
    /// Coincident or nested samples have no outer tangents and are drawn
    /// as two dots instead.
    fn seam(&mut self) -> Vec<Primitive> {
        let a = self.window[0];
        let b = self.window[1];
        let ca = Circle::new(a.position(), a.radius / 2.0);
        let cb = Circle::new(b.position(), b.radius / 2.0);

        match outer_tangents(ca, cb) {
            Some(tangents) => {
                self.push_side(tangents.left.0, tangents.left.1, tangents.right.0, tangents.right.1);
                vec![Primitive::Polygon {
                    vertices: tangents.quad().to_vec(),
                }]
            }
            None => vec![
                Primitive::Circle {
                    center: ca.center,
                    radius: ca.radius,
                },
                Primitive::Circle {
                    center: cb.center,
                    radius: cb.radius,
                },
            ],
        }
    }

    /// Straight seam from the last chunk to the final sample
    fn closing_seam(&mut self) -> Vec<Primitive> {
        let (Some(tail), Some(last)) = (self.tail, self.window.last().copied()) else {
            return Vec::new();
        };

        let end = last.position();
        let direction = end - tail;
        if direction.length() < EPSILON {
            return Vec::new();
        }

        let n = unit(perpendicular(direction)) * (last.radius / 2.0);
        let vertices = vec![tail + n, end + n, end - n, tail - n];

        self.push_side(vertices[0], vertices[1], vertices[3], vertices[2]);
        vec![Primitive::Polygon { vertices }]
    }

    /// Curve patch for the current three-sample window
    ///
    /// The first patch starts at the first sample; later ones start where
    /// the previous patch ended.
    fn chunk(&mut self) -> Vec<Primitive> {
        let [o, a, b] = [self.window[0], self.window[1], self.window[2]];
        let first = self.count == 3;

        let p1 = if first {
            o.position()
        } else {
            midpoint(o.position(), a.position())
        };
        let pc = a.position();
        let p2 = midpoint(a.position(), b.position());
        let w1 = (if first { o.radius } else { a.radius }) / 2.0;
        let w2 = b.radius / 2.0;

        let chunk = curve_chunk(p1, pc, p2, w1, w2);
        for (l, r) in chunk.left.iter().zip(chunk.right.iter()) {
            push_unique(&mut self.left, *l);
            push_unique(&mut self.right, *r);
        }
        self.tail = Some(p2);

        vec![chunk.patch]
    }

    fn push_side(&mut self, l0: Vec2, l1: Vec2, r0: Vec2, r1: Vec2) {
        push_unique(&mut self.left, l0);
        push_unique(&mut self.left, l1);
        push_unique(&mut self.right, r0);
        push_unique(&mut self.right, r1);
    }
}

fn push_unique(side: &mut Vec<Vec2>, point: Vec2) {
    if side.last().is_some_and(|last| last.distance(point) < EPSILON) {
        return;
    }
    side.push(point);
}

/// Build the full primitive list for an already filtered stroke
pub fn build_outline(samples: &[CenterlineSample], settings: &Settings) -> Vec<Primitive> {
    let mut builder = OutlineBuilder::new(settings);
    let mut primitives: Vec<Primitive> = samples
        .iter()
        .flat_map(|sample| builder.add_point(*sample))
        .collect();
    primitives.extend(builder.finish());
    primitives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::Edge;

    fn line(n: usize, radius: f32) -> Vec<CenterlineSample> {
        (0..n)
            .map(|i| CenterlineSample::new(i as f32 * 5.0, 0.0, radius))
            .collect()
    }

    #[test]
    fn test_single_sample_is_dot() {
        let prims = build_outline(&[CenterlineSample::new(3.0, 4.0, 6.0)], &Settings::default());
        assert_eq!(
            prims,
            vec![Primitive::Circle {
                center: Vec2::new(3.0, 4.0),
                radius: 6.0
            }]
        );
    }

    #[test]
    fn test_two_samples_are_one_seam() {
        let prims = build_outline(&line(2, 4.0), &Settings::default());
        let [Primitive::Polygon { vertices }] = prims.as_slice() else {
            panic!("expected a single seam polygon");
        };
        assert_eq!(vertices.len(), 4);
        for v in vertices {
            assert!((v.y.abs() - 2.0).abs() < 1e-4);
            assert!(v.x > -1e-4 && v.x < 5.0 + 1e-4);
        }
    }

    #[test]
    fn test_coincident_samples_draw_two_dots() {
        let p = CenterlineSample::new(1.0, 1.0, 3.0);
        let prims = build_outline(&[p, p], &Settings::default());
        assert_eq!(prims.len(), 2);
        for prim in &prims {
            assert_eq!(
                *prim,
                Primitive::Circle {
                    center: Vec2::new(1.0, 1.0),
                    radius: 1.5
                }
            );
        }
    }

    #[test]
    fn test_nothing_drawn_before_third_sample() {
        let mut builder = OutlineBuilder::new(&Settings::default());
        let samples = line(3, 4.0);
        assert!(builder.add_point(samples[0]).is_empty());
        assert!(builder.add_point(samples[1]).is_empty());
        assert_eq!(builder.add_point(samples[2]).len(), 1);
    }

    #[test]
    fn test_body_has_one_width_from_first_sample() {
        let prims = build_outline(&line(3, 8.0), &Settings::default());
        assert_eq!(prims.len(), 2);
        assert!(matches!(prims[0], Primitive::CurvePatch { .. }));
        assert!(matches!(prims[1], Primitive::Polygon { .. }));
        for prim in &prims {
            for point in prim.points() {
                assert!((point.y.abs() - 4.0).abs() < 1e-4);
                assert!(point.x > -1e-4 && point.x < 10.0 + 1e-4);
            }
        }
        // The first patch starts on the first sample's edge
        let Primitive::CurvePatch { start, .. } = &prims[0] else {
            unreachable!();
        };
        assert!((*start - Vec2::new(0.0, -4.0)).length() < 1e-4);
    }

    #[test]
    fn test_straight_line_chunks_keep_half_width() {
        let mut builder = OutlineBuilder::new(&Settings::default());
        let mut prims = Vec::new();
        for sample in line(6, 18.88) {
            prims.extend(builder.add_point(sample));
        }
        let chunks: Vec<_> = prims
            .iter()
            .filter(|p| matches!(p, Primitive::CurvePatch { .. }))
            .collect();
        assert_eq!(chunks.len(), 4);
        for chunk in chunks {
            for point in chunk.points() {
                assert!((point.y.abs() - 9.44).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_consecutive_chunks_share_endpoints() {
        let mut builder = OutlineBuilder::new(&Settings::default());
        let samples = [
            CenterlineSample::new(0.0, 0.0, 4.0),
            CenterlineSample::new(10.0, 2.0, 5.0),
            CenterlineSample::new(20.0, 0.0, 6.0),
            CenterlineSample::new(30.0, 5.0, 5.0),
        ];
        let mut patches = Vec::new();
        for sample in samples {
            for prim in builder.add_point(sample) {
                if let Primitive::CurvePatch { start, edges } = prim {
                    patches.push((start, edges));
                }
            }
        }
        assert_eq!(patches.len(), 2);

        // Left end of the first patch is the edge just before the cap line
        let (_, first_edges) = &patches[0];
        let cap = first_edges
            .iter()
            .position(|e| matches!(e, Edge::Line(_)))
            .unwrap();
        let first_end = first_edges[cap - 1].to();
        let (second_start, _) = patches[1];
        assert!(first_end.distance(second_start) < 1e-3);
    }

    #[test]
    fn test_finish_closes_to_last_sample() {
        let mut builder = OutlineBuilder::new(&Settings::default());
        for sample in line(4, 8.0) {
            builder.add_point(sample);
        }
        let closing = builder.finish();
        let [Primitive::Polygon { vertices }] = closing.as_slice() else {
            panic!("expected closing seam");
        };
        assert!((vertices[1] - Vec2::new(15.0, -4.0)).length() < 1e-4);
        assert!((vertices[2] - Vec2::new(15.0, 4.0)).length() < 1e-4);

        assert!(builder.finish().is_empty());
        assert!(builder.add_point(CenterlineSample::new(0.0, 0.0, 1.0)).is_empty());
    }

    #[test]
    fn test_finish_short_strokes() {
        let mut empty = OutlineBuilder::new(&Settings::default());
        assert!(empty.finish().is_empty());

        let mut pair = OutlineBuilder::new(&Settings::default());
        for sample in line(2, 8.0) {
            assert!(pair.add_point(sample).is_empty());
        }
        assert_eq!(pair.finish().len(), 1);
    }

    #[test]
    fn test_resolution_scales_output() {
        let settings = Settings {
            resolution: 2.0,
            ..Default::default()
        };
        let prims = build_outline(&[CenterlineSample::new(10.0, 20.0, 8.0)], &settings);
        assert_eq!(
            prims[0],
            Primitive::Circle {
                center: Vec2::new(5.0, 10.0),
                radius: 4.0
            }
        );
    }

    #[test]
    fn test_outline_polygon_wraps_both_sides() {
        let mut builder = OutlineBuilder::new(&Settings::default());
        for sample in line(5, 4.0) {
            builder.add_point(sample);
        }
        builder.finish();
        let outline = builder.outline();
        assert!(outline.len() >= 4);
        let first = outline[0];
        let last = outline[outline.len() - 1];
        // Both ends sit at the stroke start, on opposite sides
        assert!(first.x.abs() < 1e-4 && last.x.abs() < 1e-4);
        assert!(first.y * last.y < 0.0);
    }

    #[test]
    fn test_straight_outline_does_not_fold_back() {
        let mut builder = OutlineBuilder::new(&Settings::default());
        for sample in line(5, 4.0) {
            builder.add_point(sample);
        }
        builder.finish();
        let outline = builder.outline();

        // Left side runs forward, right side comes back, both at half width
        let half = outline.len() / 2;
        assert_eq!(outline.len(), 10);
        for pair in outline[..half].windows(2) {
            assert!(pair[1].x > pair[0].x);
        }
        for pair in outline[half..].windows(2) {
            assert!(pair[1].x < pair[0].x);
        }
        assert!(outline.iter().all(|p| (p.y.abs() - 2.0).abs() < 1e-4));
        assert!((outline[half - 1] - Vec2::new(20.0, -2.0)).length() < 1e-4);
    }

    #[test]
    fn test_duplicate_samples_stay_finite() {
        let p = CenterlineSample::new(2.0, 2.0, 3.0);
        let prims = build_outline(&[p, p, p, p, p], &Settings::default());
        assert!(prims.iter().all(Primitive::is_finite));
    }
}
