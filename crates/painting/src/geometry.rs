//! Geometric primitives used to build and post-process stroke outlines.

use glam::Vec2;

use crate::constants::EPSILON;

/// A circle with center and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// The two outer tangent ("belt") lines between two circles.
///
/// Each side is a `(start, end)` pair: `start` touches the first circle,
/// `end` touches the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OuterTangents {
    pub left: (Vec2, Vec2),
    pub right: (Vec2, Vec2),
}

impl OuterTangents {
    /// The quad enclosed by the two tangent lines, in winding order
    pub fn quad(&self) -> [Vec2; 4] {
        [self.left.0, self.left.1, self.right.1, self.right.0]
    }
}

/// Outer tangent lines of two circles.
///
/// Returns `None` when one circle lies inside the other (or both share a
/// center); callers draw the circles independently in that case.
pub fn outer_tangents(a: Circle, b: Circle) -> Option<OuterTangents> {
    let delta = b.center - a.center;
    let dist = delta.length();

    if dist < EPSILON || dist < (b.radius - a.radius).abs() {
        return None;
    }

    let base = delta.y.atan2(delta.x);
    let spread = ((a.radius - b.radius) / dist).clamp(-1.0, 1.0).acos();
    let t0 = base + spread;
    let t1 = base - spread;

    let touch = |c: Circle, angle: f32| {
        let (sin, cos) = angle.sin_cos();
        c.center + Vec2::new(cos, sin) * c.radius
    };

    Some(OuterTangents {
        left: (touch(a, t1), touch(b, t1)),
        right: (touch(a, t0), touch(b, t0)),
    })
}

/// Determinant of the 3x3 matrix given in row-major order
#[allow(clippy::too_many_arguments)]
pub fn det3(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32, g: f32, h: f32, i: f32) -> f32 {
    a * e * i + b * f * g + c * d * h - a * f * h - b * d * i - c * e * g
}

/// Circumcircle of three points; `None` when they are (nearly) collinear
pub fn circle_from_three_points(p0: Vec2, p1: Vec2, p2: Vec2) -> Option<Circle> {
    let a = det3(p0.x, p0.y, 1.0, p1.x, p1.y, 1.0, p2.x, p2.y, 1.0);
    if a.abs() < EPSILON {
        return None;
    }

    let s0 = p0.length_squared();
    let s1 = p1.length_squared();
    let s2 = p2.length_squared();

    let bx = -det3(s0, p0.y, 1.0, s1, p1.y, 1.0, s2, p2.y, 1.0);
    let by = det3(s0, p0.x, 1.0, s1, p1.x, 1.0, s2, p2.x, 1.0);
    let c = -det3(s0, p0.x, p0.y, s1, p1.x, p1.y, s2, p2.x, p2.y);

    let center = Vec2::new(-bx / (2.0 * a), -by / (2.0 * a));
    let radius = (bx * bx + by * by - 4.0 * a * c).max(0.0).sqrt() / (2.0 * a.abs());
    Some(Circle::new(center, radius))
}

/// One cubic segment of a spline: two control points and the end point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub cp1: Vec2,
    pub cp2: Vec2,
    pub end: Vec2,
}

/// A spline path: start point followed by cubic segments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplinePath {
    pub start: Vec2,
    pub segments: Vec<CubicSegment>,
}

/// Catmull-Rom spline through `points` as cubic Bezier segments.
///
/// `k` is the tension (1.0 = standard Catmull-Rom). The spline is clamped:
/// the first and last points stand in for their own missing neighbors.
pub fn catmull_rom(points: &[Vec2], k: f32) -> SplinePath {
    let Some(&start) = points.first() else {
        return SplinePath::default();
    };

    let last = points.len() - 1;
    let segments = (0..last)
        .map(|i| {
            let p0 = points[i.saturating_sub(1)];
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = points[(i + 2).min(last)];
            CubicSegment {
                cp1: p1 + (p2 - p0) / 6.0 * k,
                cp2: p2 - (p3 - p1) / 6.0 * k,
                end: p2,
            }
        })
        .collect();

    SplinePath { start, segments }
}

/// Ramer-Douglas-Peucker line simplification.
///
/// Keeps the point farthest from the chord while it lies further than
/// `tolerance`, recursing on both halves.
pub fn simplify(points: &[Vec2], tolerance: f32) -> Vec<Vec2> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let a = points[0];
    let b = points[points.len() - 1];
    let chord = b - a;
    let chord_len = chord.length();

    let mut farthest = 0.0;
    let mut index = 0;
    for (i, &p) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let d = if chord_len < EPSILON {
            p.distance(a)
        } else {
            (chord.y * p.x - chord.x * p.y + b.x * a.y - b.y * a.x).abs() / chord_len
        };
        if d >= farthest {
            farthest = d;
            index = i;
        }
    }

    if farthest > tolerance {
        let mut left = simplify(&points[..=index], tolerance);
        let right = simplify(&points[index..], tolerance);
        left.pop();
        left.extend(right);
        left
    } else {
        vec![a, b]
    }
}

/// Rotate `point` around `center` by `angle` radians
pub fn rotate_point(point: Vec2, center: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let p = point - center;
    Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos) + center
}

/// Move `point` by `distance` in the direction `angle` (radians)
pub fn project_point(point: Vec2, angle: f32, distance: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    point + Vec2::new(cos, sin) * distance
}

/// Shortest signed angular distance from `a0` to `a1`
pub fn angle_delta(a0: f32, a1: f32) -> f32 {
    let max = std::f32::consts::TAU;
    let da = (a1 - a0) % max;
    ((2.0 * da) % max) - da
}

/// Interpolate between two angles along the shortest arc
pub fn lerp_angle(a0: f32, a1: f32, t: f32) -> f32 {
    a0 + angle_delta(a0, a1) * t
}
