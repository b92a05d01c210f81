use crate::render::geometry::{Point, Rect};

/// Semantic paint roles. A surface maps them onto its own colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ink {
    Background,
    KeyActive,
    KeyActiveText,
    KeyIdle,
    KeyIdleText,
    KeyOutline,
    Label,
    Connector,
    HelpBar,
    HelpText,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Font {
    Key,
    Label,
}

/// Drawing capabilities the overlay needs. Coordinates are logical units
/// inside [`Surface::clip`].
pub trait Surface {
    fn clip(&self) -> Rect;

    fn measure_text(&self, text: &str, font: Font) -> f32;

    fn clear(&mut self, ink: Ink);

    fn fill_rect(&mut self, rect: Rect, radius: f32, ink: Ink);

    fn stroke_rect(&mut self, rect: Rect, radius: f32, ink: Ink);

    /// Draw `text` with its top-left corner at `at`.
    fn draw_text(&mut self, text: &str, at: Point, font: Font, ink: Ink);

    /// Connector segment; the end point carries the arrow head.
    fn draw_line(&mut self, from: Point, to: Point, ink: Ink);

    fn draw_polyline(&mut self, points: &[Point], ink: Ink) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], ink);
        }
    }
}
