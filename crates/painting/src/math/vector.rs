//! 2D vector helpers on top of [`glam::Vec2`].
//!
//! glam already covers addition, subtraction, scaling, dot products and
//! lengths. The functions here add the operations the stroke geometry needs
//! with total, NaN-free behavior on degenerate input.

use glam::Vec2;

use crate::constants::EPSILON;

/// Interpolate from `a` toward `b`: `a + t * (b - a)`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate from `a` toward `b`: `a + t * (b - a)`
pub fn lerp_vec(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Midpoint between two points
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// Perpendicular rotation `(x, y) -> (y, -x)`
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// Scalar cross product `a.x * b.y - b.x * a.y`
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - b.x * a.y
}

/// Unit vector in the direction of `v`, or zero for a zero-length vector
pub fn unit(v: Vec2) -> Vec2 {
    let len = v.length();
    if len < EPSILON { Vec2::ZERO } else { v / len }
}

/// Signed angle from `a` to `b` in radians
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    cross(a, b).atan2(a.dot(b))
}

/// Signed angle at `pc` between the rays toward `p1` and `p2`
pub fn angle3(p1: Vec2, pc: Vec2, p2: Vec2) -> f32 {
    angle_between(p1 - pc, p2 - pc)
}

/// Length of the projection of `a` onto `b`
pub fn projection_length(a: Vec2, b: Vec2) -> f32 {
    let len = b.length();
    if len < EPSILON { 0.0 } else { a.dot(b) / len }
}

/// Rotate `v` by `radians` around the origin
pub fn rotate(v: Vec2, radians: f32) -> Vec2 {
    let (sin, cos) = radians.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.y * cos + v.x * sin)
}

/// Orientation of `pc` relative to the line `p1 -> p2`; zero when collinear
pub fn is_left(p1: Vec2, pc: Vec2, p2: Vec2) -> f32 {
    (pc.x - p1.x) * (p2.y - p1.y) - (p2.x - p1.x) * (pc.y - p1.y)
}

/// Whether `p1 -> pc -> p2` turns clockwise in y-down screen space
pub fn clockwise(p1: Vec2, pc: Vec2, p2: Vec2) -> bool {
    is_left(p1, pc, p2) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_lerp_matches_lerp_vec() {
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        // Outside 0.0-1.0 both extrapolate
        assert_eq!(lerp(2.0, 4.0, -1.0), 0.0);
        assert_eq!(lerp(2.0, 4.0, 2.0), 6.0);
        let v = lerp_vec(Vec2::new(2.0, 0.0), Vec2::new(4.0, 0.0), 2.0);
        assert_eq!(v.x, lerp(2.0, 4.0, 2.0));
    }

    #[test]
    fn test_lerp_vec() {
        let v = lerp_vec(Vec2::ZERO, Vec2::new(10.0, -4.0), 0.25);
        assert!(close(v, Vec2::new(2.5, -1.0)));
    }

    #[test]
    fn test_perpendicular_and_cross() {
        let v = Vec2::new(1.0, 0.0);
        assert_eq!(perpendicular(v), Vec2::new(0.0, -1.0));
        assert_eq!(cross(Vec2::X, Vec2::Y), 1.0);
        assert_eq!(cross(Vec2::Y, Vec2::X), -1.0);
    }

    #[test]
    fn test_unit_of_zero_is_zero() {
        assert_eq!(unit(Vec2::ZERO), Vec2::ZERO);
        assert!(close(unit(Vec2::new(3.0, 4.0)), Vec2::new(0.6, 0.8)));
    }

    #[test]
    fn test_angles() {
        assert!((angle_between(Vec2::X, Vec2::Y) - FRAC_PI_2).abs() < 1e-5);
        // A straight run measures a half turn at the middle point
        let straight = angle3(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0));
        assert!((straight.abs() - PI).abs() < 1e-5);
        // Degenerate input stays finite
        assert_eq!(angle3(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO), 0.0);
    }

    #[test]
    fn test_rotate() {
        assert!(close(rotate(Vec2::X, FRAC_PI_2), Vec2::Y));
    }

    #[test]
    fn test_projection_length() {
        assert!((projection_length(Vec2::new(3.0, 4.0), Vec2::new(2.0, 0.0)) - 3.0).abs() < 1e-5);
        assert_eq!(projection_length(Vec2::ONE, Vec2::ZERO), 0.0);
    }

    #[test]
    fn test_orientation() {
        let a = Vec2::ZERO;
        let b = Vec2::new(1.0, 1.0);
        let c = Vec2::new(2.0, 0.0);
        assert!(clockwise(a, b, c) != clockwise(a, Vec2::new(1.0, -1.0), c));
        assert_eq!(is_left(a, Vec2::new(1.0, 0.0), c), 0.0);
    }
}
