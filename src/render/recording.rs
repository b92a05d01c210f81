use crate::render::geometry::{Point, Rect};
use crate::render::surface::{Font, Ink, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Ink),
    Fill { rect: Rect, ink: Ink },
    Stroke { rect: Rect, ink: Ink },
    Text { text: String, at: Point, font: Font, ink: Ink },
    Line { from: Point, to: Point, ink: Ink },
    Polyline { points: Vec<Point>, ink: Ink },
}

/// In-memory surface that records draw calls. Text is measured as a fixed
/// advance per character.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    clip: Rect,
    char_width: f32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(clip: Rect, char_width: f32) -> Self {
        Self {
            clip,
            char_width,
            ops: Vec::new(),
        }
    }

    pub fn texts(&self, ink: Ink) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, ink: i, .. } if *i == ink => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self, ink: Ink) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Fill { ink: i, .. } if *i == ink))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clip(&self) -> Rect {
        self.clip
    }

    fn measure_text(&self, text: &str, _font: Font) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn clear(&mut self, ink: Ink) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear(ink));
    }

    fn fill_rect(&mut self, rect: Rect, _radius: f32, ink: Ink) {
        self.ops.push(DrawOp::Fill { rect, ink });
    }

    fn stroke_rect(&mut self, rect: Rect, _radius: f32, ink: Ink) {
        self.ops.push(DrawOp::Stroke { rect, ink });
    }

    fn draw_text(&mut self, text: &str, at: Point, font: Font, ink: Ink) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            at,
            font,
            ink,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, ink: Ink) {
        self.ops.push(DrawOp::Line { from, to, ink });
    }

    fn draw_polyline(&mut self, points: &[Point], ink: Ink) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            ink,
        });
    }
}
