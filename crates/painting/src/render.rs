//! Render boundary
//!
//! The core never touches pixels. Outline primitives are paired with a
//! [`Paint`] and handed, in order, to a [`RenderTarget`] supplied by the
//! caller. Later commands occlude earlier ones.

use quill_config::{Brush, parse_hex_color};
use tracing::warn;

use crate::outline::Primitive;

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Fill style shared by every primitive of one stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    /// Linear RGBA in 0.0-1.0
    pub color: [f32; 4],
    /// Per-primitive alpha
    pub alpha: f32,
    /// Stroke-level opacity
    pub opacity: f32,
}

impl Paint {
    /// Paint for strokes drawn with `brush`
    ///
    /// An unparsable color falls back to white.
    pub fn from_brush(brush: &Brush) -> Self {
        let color = match parse_hex_color(&brush.color) {
            Ok(color) => color,
            Err(err) => {
                warn!("Invalid brush color {:?}: {}, using white", brush.color, err);
                WHITE
            }
        };
        Self {
            color,
            alpha: brush.alpha,
            opacity: brush.opacity,
        }
    }
}

/// One primitive with its fill
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub primitive: Primitive,
    pub paint: Paint,
}

/// Destination for draw commands (canvas, scene graph, GPU batcher, ...)
pub trait RenderTarget {
    /// Remove everything drawn so far
    fn clear(&mut self);

    /// Draw one command on top of everything drawn so far
    fn draw(&mut self, command: &DrawCommand);

    /// Draw a batch of primitives with a shared paint
    fn draw_all(&mut self, primitives: Vec<Primitive>, paint: Paint) {
        for primitive in primitives {
            self.draw(&DrawCommand { primitive, paint });
        }
    }
}

/// Render target that keeps every command in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    commands: Vec<DrawCommand>,
    clear_count: usize,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands drawn since the last clear, in draw order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Primitives drawn since the last clear, in draw order
    pub fn primitives(&self) -> Vec<&Primitive> {
        self.commands.iter().map(|c| &c.primitive).collect()
    }

    /// Number of times the target has been cleared
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl RenderTarget for RecordingTarget {
    fn clear(&mut self) {
        self.commands.clear();
        self.clear_count += 1;
    }

    fn draw(&mut self, command: &DrawCommand) {
        self.commands.push(command.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_paint_from_brush() {
        let brush = Brush {
            color: "#ff0000".to_string(),
            alpha: 0.5,
            opacity: 0.8,
            ..Default::default()
        };
        let paint = Paint::from_brush(&brush);
        assert_eq!(paint.color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(paint.alpha, 0.5);
        assert_eq!(paint.opacity, 0.8);
    }

    #[test]
    fn test_invalid_color_falls_back_to_white() {
        let brush = Brush {
            color: "chartreuse".to_string(),
            ..Default::default()
        };
        assert_eq!(Paint::from_brush(&brush).color, WHITE);
    }

    #[test]
    fn test_recording_target_keeps_order() {
        let mut target = RecordingTarget::new();
        let paint = Paint::from_brush(&Brush::default());
        let a = Primitive::Circle {
            center: Vec2::ZERO,
            radius: 1.0,
        };
        let b = Primitive::Polygon {
            vertices: vec![Vec2::ZERO, Vec2::X, Vec2::Y],
        };
        target.draw_all(vec![a.clone(), b.clone()], paint);
        assert_eq!(target.primitives(), vec![&a, &b]);

        target.clear();
        assert!(target.is_empty());
        assert_eq!(target.clear_count(), 1);
    }
}
