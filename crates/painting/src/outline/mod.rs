//! Stroke-to-outline geometry
//!
//! This module provides:
//! - [`Primitive`] - Ordered drawing primitives handed to a render backend
//! - [`OutlineBuilder`] - Incremental outline construction from centerline samples
//!
//! A stroke outline is emitted as a sequence of primitives: one closed
//! curve patch per three-sample window, starting at the first sample, and
//! a straight closing seam on finish. Consecutive pieces share their
//! endpoints and keep half the local radius either side of the centerline.
//! Strokes too short for a patch are drawn on finish, a lone sample as a
//! dot and a pair as a tangent seam.

mod builder;
mod chunk;

use glam::Vec2;

pub use builder::{OutlineBuilder, build_outline};

/// One edge of a closed curve patch, continuing from the previous point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Line(Vec2),
    Quad { control: Vec2, to: Vec2 },
}

impl Edge {
    /// End point of the edge
    pub fn to(&self) -> Vec2 {
        match *self {
            Edge::Line(to) | Edge::Quad { to, .. } => to,
        }
    }
}

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Filled circle
    Circle { center: Vec2, radius: f32 },
    /// Filled polygon (closed implicitly)
    Polygon { vertices: Vec<Vec2> },
    /// Filled region bounded by line and quadratic edges, closed back to `start`
    CurvePatch { start: Vec2, edges: Vec<Edge> },
}

impl Primitive {
    /// On-curve points of the primitive (control points excluded)
    pub fn points(&self) -> Vec<Vec2> {
        match self {
            Primitive::Circle { center, .. } => vec![*center],
            Primitive::Polygon { vertices } => vertices.clone(),
            Primitive::CurvePatch { start, edges } => std::iter::once(*start)
                .chain(edges.iter().map(Edge::to))
                .collect(),
        }
    }

    /// Whether every coordinate is finite
    pub fn is_finite(&self) -> bool {
        match self {
            Primitive::Circle { center, radius } => center.is_finite() && radius.is_finite(),
            Primitive::Polygon { vertices } => vertices.iter().all(|v| v.is_finite()),
            Primitive::CurvePatch { start, edges } => {
                start.is_finite()
                    && edges.iter().all(|edge| match *edge {
                        Edge::Line(to) => to.is_finite(),
                        Edge::Quad { control, to } => control.is_finite() && to.is_finite(),
                    })
            }
        }
    }
}
