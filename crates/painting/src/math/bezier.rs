//! Quadratic Bezier evaluation.
//!
//! A [`QuadBezier`] is only ever used for local interpolation over
//! `t` in 0.0-1.0 while a single outline chunk is built.

use glam::Vec2;

use super::vector::{angle3, cross, lerp_vec, perpendicular, unit};
use crate::constants::EPSILON;

/// Quadratic Bezier with endpoints `p1`, `p2` and control point `pc`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadBezier {
    pub p1: Vec2,
    pub pc: Vec2,
    pub p2: Vec2,
}

impl QuadBezier {
    pub fn new(p1: Vec2, pc: Vec2, p2: Vec2) -> Self {
        Self { p1, pc, p2 }
    }

    /// Build the curve that starts at `p1`, ends at `p2` and passes through
    /// `through` at the parameter closest to it.
    pub fn through_points(p1: Vec2, through: Vec2, p2: Vec2) -> Self {
        let guide = Self::new(p1, through, p2);
        Self::new(p1, guide.control_through(guide.closest_t_to_pc()), p2)
    }

    /// Point at `t`: `lerp(lerp(p1, pc, t), lerp(pc, p2, t), t)`
    pub fn point_at(&self, t: f32) -> Vec2 {
        lerp_vec(lerp_vec(self.p1, self.pc, t), lerp_vec(self.pc, self.p2, t), t)
    }

    /// First derivative (velocity) at `t`
    pub fn tangent_at(&self, t: f32) -> Vec2 {
        ((self.p1 - self.pc * 2.0 + self.p2) * t + (self.pc - self.p1)) * 2.0
    }

    /// Second derivative, constant over the curve
    pub fn second_derivative(&self) -> Vec2 {
        (self.p1 - self.pc * 2.0 + self.p2) * 2.0
    }

    /// Unit normal at `t`
    ///
    /// Where the derivative vanishes (control point on an endpoint) the
    /// chord direction is used instead; a fully collapsed curve yields zero.
    pub fn normal_at(&self, t: f32) -> Vec2 {
        let mut tangent = self.tangent_at(t);
        if tangent.length_squared() < EPSILON * EPSILON {
            tangent = self.p2 - self.p1;
        }
        unit(perpendicular(tangent))
    }

    /// Curvature `|d1 x d2| / |d1|^3` at `t`; zero where the speed vanishes
    pub fn curvature_at(&self, t: f32) -> f32 {
        let d1 = self.tangent_at(t);
        let speed = d1.length();
        if speed < EPSILON {
            return 0.0;
        }
        cross(d1, self.second_derivative()).abs() / (speed * speed * speed)
    }

    /// Parameter at which the curve passes closest to its control point,
    /// estimated from the two flanking distances. 0.5 when both are zero.
    pub fn closest_t_to_pc(&self) -> f32 {
        let d1 = self.pc.distance(self.p1);
        let d2 = self.pc.distance(self.p2);
        if d1 + d2 < EPSILON {
            return 0.5;
        }
        d1 / (d1 + d2)
    }

    /// Control point of a curve through `p1` and `p2` that passes through
    /// this curve's `pc` at parameter `t`
    ///
    /// At `t` = 0 or 1 the control point is undetermined and `pc` is returned.
    pub fn control_through(&self, t: f32) -> Vec2 {
        let t1 = 1.0 - t;
        let denom = 2.0 * t * t1;
        if denom.abs() < EPSILON {
            return self.pc;
        }
        (self.pc - self.p1 * (t1 * t1) - self.p2 * (t * t)) / denom
    }

    /// Control point of the sub-curve between `t0` and `t1` (De Casteljau)
    pub fn control_point_of_segment(&self, t0: f32, t1: f32) -> Vec2 {
        lerp_vec(lerp_vec(self.p1, self.pc, t0), lerp_vec(self.pc, self.p2, t0), t1)
    }

    /// The sub-curve between `t0` and `t1`
    pub fn segment(&self, t0: f32, t1: f32) -> Self {
        Self::new(
            self.point_at(t0),
            self.control_point_of_segment(t0, t1),
            self.point_at(t1),
        )
    }

    /// Signed angle `p1-pc-p2` in radians
    pub fn angle(&self) -> f32 {
        angle3(self.p1, self.pc, self.p2)
    }

    /// Signed angle `p1-pc-p2` in degrees
    pub fn angle_degrees(&self) -> f32 {
        self.angle().to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    fn arc() -> QuadBezier {
        QuadBezier::new(Vec2::new(0.0, 0.0), Vec2::new(5.0, 10.0), Vec2::new(10.0, 0.0))
    }

    #[test]
    fn test_point_at_endpoints_and_middle() {
        let b = arc();
        assert!(close(b.point_at(0.0), b.p1));
        assert!(close(b.point_at(1.0), b.p2));
        assert!(close(b.point_at(0.5), Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_tangent_and_normal() {
        let b = arc();
        assert!(close(b.tangent_at(0.0), Vec2::new(10.0, 20.0)));
        assert!(close(b.tangent_at(0.5), Vec2::new(10.0, 0.0)));
        let n = b.normal_at(0.5);
        assert!((n.length() - 1.0).abs() < 1e-5);
        assert!(close(n, Vec2::new(0.0, -1.0)));
    }

    #[test]
    fn test_normal_of_collapsed_curve_is_finite() {
        let p = Vec2::new(3.0, 3.0);
        let b = QuadBezier::new(p, p, p);
        let n = b.normal_at(0.0);
        assert!(n.is_finite());
        assert_eq!(n, Vec2::ZERO);

        // Control point on the start: falls back to the chord
        let b = QuadBezier::new(Vec2::ZERO, Vec2::ZERO, Vec2::new(4.0, 0.0));
        assert!(close(b.normal_at(0.0), Vec2::new(0.0, -1.0)));
    }

    #[test]
    fn test_curvature() {
        // Straight line has no curvature
        let line = QuadBezier::new(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0));
        assert_eq!(line.curvature_at(0.3), 0.0);
        assert!(arc().curvature_at(0.5) > 0.0);
        // Zero-speed point stays finite
        let p = Vec2::ONE;
        assert_eq!(QuadBezier::new(p, p, p).curvature_at(0.5), 0.0);
    }

    #[test]
    fn test_closest_t_to_pc() {
        assert!((arc().closest_t_to_pc() - 0.5).abs() < 1e-5);
        let p = Vec2::ONE;
        assert_eq!(QuadBezier::new(p, p, p).closest_t_to_pc(), 0.5);
    }

    #[test]
    fn test_through_points_passes_through() {
        let through = Vec2::new(3.0, 4.0);
        let b = QuadBezier::through_points(Vec2::ZERO, through, Vec2::new(10.0, 0.0));
        let t = QuadBezier::new(b.p1, through, b.p2).closest_t_to_pc();
        assert!(close(b.point_at(t), through));
    }

    #[test]
    fn test_control_through_degenerate_t() {
        let b = arc();
        assert_eq!(b.control_through(0.0), b.pc);
        assert_eq!(b.control_through(1.0), b.pc);
    }

    #[test]
    fn test_segment_matches_parent_curve() {
        let b = arc();
        let s = b.segment(0.0, 0.5);
        assert!(close(s.p1, b.p1));
        assert!(close(s.p2, b.point_at(0.5)));
        // Midpoint of the half curve is the quarter point of the full one
        assert!(close(s.point_at(0.5), b.point_at(0.25)));
    }

    #[test]
    fn test_angle_degrees() {
        let right = QuadBezier::new(Vec2::new(1.0, 0.0), Vec2::ZERO, Vec2::new(0.0, 1.0));
        assert!((right.angle_degrees().abs() - 90.0).abs() < 1e-3);
    }
}
