use glam::Vec2;
use quill_config::InputKind;
use serde::{Deserialize, Serialize};

/// A raw pointer sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
    /// Pressure 0.0-1.0 (device values are clamped on use)
    pub pressure: f32,
}

impl Sample {
    pub fn new(x: f32, y: f32, pressure: f32) -> Self {
        Self { x, y, pressure }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// A filtered point along the stroke's spine
///
/// Laid out for direct GPU upload with bytemuck.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
#[repr(C)]
pub struct CenterlineSample {
    pub x: f32,
    pub y: f32,
    /// Local stroke width, always > 0
    pub radius: f32,
}

impl CenterlineSample {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// The durable record of one stroke
///
/// Append-only while drawing; never modified once finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    #[serde(rename = "type")]
    pub input_kind: InputKind,
    pub points: Vec<Sample>,
    /// Seed for the jitter source, so replays reproduce the same stroke
    #[serde(default)]
    pub seed: u64,
}

impl Stroke {
    pub fn new(input_kind: InputKind, seed: u64) -> Self {
        Self {
            input_kind,
            points: Vec::new(),
            seed,
        }
    }
}

/// Finished strokes in drawing order, plus strokes removed by undo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokeCollection {
    strokes: Vec<Stroke>,
    #[serde(skip)]
    redo_stack: Vec<Stroke>,
}

impl StrokeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_strokes(strokes: Vec<Stroke>) -> Self {
        Self {
            strokes,
            redo_stack: Vec::new(),
        }
    }

    /// Append a finished stroke. Invalidates anything that could be redone.
    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
        self.redo_stack.clear();
    }

    /// Move the most recent stroke onto the redo stack
    pub fn undo(&mut self) -> bool {
        match self.strokes.pop() {
            Some(stroke) => {
                self.redo_stack.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Restore the most recently undone stroke
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(stroke) => {
                self.strokes.push(stroke);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    pub fn as_slice(&self) -> &[Stroke] {
        &self.strokes
    }
}
