//! Curve chunk construction for one three-sample window.

use glam::Vec2;

use super::{Edge, Primitive};
use crate::constants::{EPSILON, OPEN_ANGLE_DEGREES};
use crate::math::{QuadBezier, lerp};

/// A closed patch plus the edge vertices it contributes
pub(super) struct Chunk {
    pub patch: Primitive,
    pub left: Vec<Vec2>,
    pub right: Vec<Vec2>,
}

/// Offset at a control point shared by two unit normals.
///
/// The sum of the normals points along their bisector; scaling by
/// `2w / |m|^2` gives length `w` when the normals agree. Opposed normals
/// fall back to the first one.
fn mitre(a: Vec2, b: Vec2, half_width: f32) -> Vec2 {
    let m = a + b;
    let len2 = m.length_squared();
    if len2 < EPSILON {
        return a * half_width;
    }
    m * (2.0 * half_width / len2)
}

/// Outline patch around the quadratic `p1-pc-p2`, with half-widths `w1`
/// at `p1` and `w2` at `p2`.
pub(super) fn curve_chunk(p1: Vec2, pc: Vec2, p2: Vec2, w1: f32, w2: f32) -> Chunk {
    let b = QuadBezier::new(p1, pc, p2);
    let t = b.closest_t_to_pc();

    let n1 = b.normal_at(0.0);
    let p1l = p1 + n1 * w1;
    let p1r = p1 - n1 * w1;

    let n2 = b.normal_at(1.0);
    let p2l = p2 + n2 * w2;
    let p2r = p2 - n2 * w2;

    if b.angle_degrees().abs() < OPEN_ANGLE_DEGREES {
        // Tight bend: split at the apex and fit each half separately
        let pt = b.point_at(t);
        let nt = b.normal_at(t);
        let wt = lerp(w1, w2, t);
        let ptl = pt + nt * wt;
        let ptr = pt - nt * wt;

        let p1c = b.control_point_of_segment(0.0, t);
        let p1t = lerp(0.0, t, QuadBezier::new(p1, p1c, pt).closest_t_to_pc());
        let off1 = mitre(n1, nt, lerp(w1, w2, p1t));

        let p2c = b.control_point_of_segment(t, 1.0);
        let p2t = lerp(t, 1.0, QuadBezier::new(pt, p2c, p2).closest_t_to_pc());
        let off2 = mitre(nt, n2, lerp(w1, w2, p2t));

        let edges = vec![
            Edge::Quad { control: p1c + off1, to: ptl },
            Edge::Quad { control: p2c + off2, to: p2l },
            Edge::Line(p2r),
            Edge::Quad { control: p2c - off2, to: ptr },
            Edge::Quad { control: p1c - off1, to: p1r },
        ];

        Chunk {
            patch: Primitive::CurvePatch { start: p1l, edges },
            left: vec![p1l, ptl, p2l],
            right: vec![p1r, ptr, p2r],
        }
    } else {
        let off = mitre(n1, n2, lerp(w1, w2, t));
        let edges = vec![
            Edge::Quad { control: pc + off, to: p2l },
            Edge::Line(p2r),
            Edge::Quad { control: pc - off, to: p1r },
        ];

        Chunk {
            patch: Primitive::CurvePatch { start: p1l, edges },
            left: vec![p1l, p2l],
            right: vec![p1r, p2r],
        }
    }
}
