use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellRect;
use ratatui::style::Style;
use ratatui::text::Line;

use crate::render::{Font, Ink, Point, Rect, Surface};
use crate::ui::theme::Theme;

/// Logical units per text row. Columns are one unit wide, so a square key
/// in logical units looks square on a typical terminal font.
pub const ROW_UNITS: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dir {
    Left,
    Right,
    Up,
    Down,
}

impl Dir {
    fn between(from: (i32, i32), to: (i32, i32)) -> Option<Dir> {
        if from.1 == to.1 {
            match to.0.cmp(&from.0) {
                std::cmp::Ordering::Greater => Some(Dir::Right),
                std::cmp::Ordering::Less => Some(Dir::Left),
                std::cmp::Ordering::Equal => None,
            }
        } else if from.0 == to.0 {
            if to.1 > from.1 { Some(Dir::Down) } else { Some(Dir::Up) }
        } else {
            None
        }
    }

    fn arrow(self) -> &'static str {
        match self {
            Dir::Left => "◀",
            Dir::Right => "▶",
            Dir::Up => "▲",
            Dir::Down => "▼",
        }
    }

    fn stroke(self) -> &'static str {
        match self {
            Dir::Left | Dir::Right => "─",
            Dir::Up | Dir::Down => "│",
        }
    }
}

/// Corner joining a segment travelling `incoming` to one travelling `outgoing`.
fn corner(incoming: Dir, outgoing: Dir) -> &'static str {
    use Dir::*;
    match (incoming, outgoing) {
        (Right, Down) | (Up, Left) => "┐",
        (Right, Up) | (Down, Left) => "┘",
        (Left, Down) | (Up, Right) => "┌",
        (Left, Up) | (Down, Right) => "└",
        (d, _) => d.stroke(),
    }
}

fn is_line_glyph(symbol: &str) -> bool {
    matches!(
        symbol,
        " " | "─" | "│" | "┐" | "┘" | "┌" | "└" | "╭" | "╮" | "╰" | "╯" | "·"
    )
}

/// [`Surface`] over a ratatui [`Buffer`] region.
///
/// Connectors only draw over blank cells and other line glyphs, so label
/// and key text stay readable where lines cross them.
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: CellRect,
    theme: &'a Theme,
}

impl<'a> BufferSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: CellRect, theme: &'a Theme) -> Self {
        Self { buf, area, theme }
    }

    fn to_cell(&self, p: Point) -> (i32, i32) {
        (p.x.floor() as i32, (p.y / ROW_UNITS).floor() as i32)
    }

    fn in_area(&self, col: i32, row: i32) -> Option<(u16, u16)> {
        if col < 0 || row < 0 || col >= i32::from(self.area.width) || row >= i32::from(self.area.height)
        {
            return None;
        }
        Some((self.area.x + col as u16, self.area.y + row as u16))
    }

    /// Cell span covered by `rect`: columns `[c0, c1)` and rows `[r0, r1)`.
    fn span(&self, rect: Rect) -> (i32, i32, i32, i32) {
        let c0 = rect.x.floor() as i32;
        let c1 = rect.right().floor() as i32;
        let r0 = (rect.y / ROW_UNITS).floor() as i32;
        let r1 = (rect.bottom() / ROW_UNITS).ceil() as i32;
        (c0, c1, r0, r1)
    }

    fn put(&mut self, col: i32, row: i32, symbol: &str, ink: Ink, force: bool) {
        let Some(pos) = self.in_area(col, row) else {
            return;
        };
        let color = self.theme.ink(ink);
        if let Some(cell) = self.buf.cell_mut(pos) {
            if force || is_line_glyph(cell.symbol()) {
                cell.set_symbol(symbol);
                cell.set_fg(color);
            }
        }
    }

    fn segment(&mut self, from: (i32, i32), to: (i32, i32), ink: Ink) {
        match Dir::between(from, to) {
            Some(dir) => {
                let (mut c, mut r) = from;
                while (c, r) != to {
                    self.put(c, r, dir.stroke(), ink, false);
                    match dir {
                        Dir::Left => c -= 1,
                        Dir::Right => c += 1,
                        Dir::Up => r -= 1,
                        Dir::Down => r += 1,
                    }
                }
            }
            None if from == to => {}
            None => {
                // Diagonal: stepped dots.
                let (dx, dy) = (to.0 - from.0, to.1 - from.1);
                let steps = dx.abs().max(dy.abs());
                for i in 0..steps {
                    let c = from.0 + dx * i / steps;
                    let r = from.1 + dy * i / steps;
                    self.put(c, r, "·", ink, false);
                }
            }
        }
    }

    fn arrow_head(&mut self, from: (i32, i32), to: (i32, i32), ink: Ink) {
        let dir = Dir::between(from, to).unwrap_or(if to.0 >= from.0 { Dir::Right } else { Dir::Left });
        self.put(to.0, to.1, dir.arrow(), ink, true);
    }
}

impl Surface for BufferSurface<'_> {
    fn clip(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            f32::from(self.area.width),
            f32::from(self.area.height) * ROW_UNITS,
        )
    }

    fn measure_text(&self, text: &str, _font: Font) -> f32 {
        Line::raw(text).width() as f32
    }

    fn clear(&mut self, ink: Ink) {
        let style = Style::default().bg(self.theme.ink(ink)).fg(self.theme.colors.fg());
        self.buf.set_style(self.area, style);
        for row in 0..self.area.height {
            for col in 0..self.area.width {
                if let Some(cell) = self.buf.cell_mut((self.area.x + col, self.area.y + row)) {
                    cell.set_symbol(" ");
                }
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, _radius: f32, ink: Ink) {
        let color = self.theme.ink(ink);
        let (c0, c1, r0, r1) = self.span(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                if let Some(pos) = self.in_area(col, row) {
                    if let Some(cell) = self.buf.cell_mut(pos) {
                        cell.set_symbol(" ");
                        cell.set_bg(color);
                    }
                }
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, radius: f32, ink: Ink) {
        let (c0, c1, r0, r1) = self.span(rect);
        // Too small for a frame; the fill alone marks the key.
        if c1 - c0 < 3 || r1 - r0 < 3 {
            return;
        }
        let (tl, tr, bl, br) = if radius > 0.0 {
            ("╭", "╮", "╰", "╯")
        } else {
            ("┌", "┐", "└", "┘")
        };
        let (right, bottom) = (c1 - 1, r1 - 1);
        for col in c0 + 1..right {
            self.put(col, r0, "─", ink, false);
            self.put(col, bottom, "─", ink, false);
        }
        for row in r0 + 1..bottom {
            self.put(c0, row, "│", ink, false);
            self.put(right, row, "│", ink, false);
        }
        self.put(c0, r0, tl, ink, false);
        self.put(right, r0, tr, ink, false);
        self.put(c0, bottom, bl, ink, false);
        self.put(right, bottom, br, ink, false);
    }

    fn draw_text(&mut self, text: &str, at: Point, _font: Font, ink: Ink) {
        let (col, row) = self.to_cell(at);
        let (col, skip) = if col < 0 { (0, (-col) as usize) } else { (col, 0) };
        let Some((x, y)) = self.in_area(col, row) else {
            return;
        };
        let visible: String = text.chars().skip(skip).collect();
        let max_width = (self.area.right() - x) as usize;
        let style = Style::default().fg(self.theme.ink(ink));
        self.buf.set_stringn(x, y, visible, max_width, style);
    }

    fn draw_line(&mut self, from: Point, to: Point, ink: Ink) {
        let (a, b) = (self.to_cell(from), self.to_cell(to));
        self.segment(a, b, ink);
        self.arrow_head(a, b, ink);
    }

    fn draw_polyline(&mut self, points: &[Point], ink: Ink) {
        let cells: Vec<(i32, i32)> = points.iter().map(|p| self.to_cell(*p)).collect();
        for pair in cells.windows(2) {
            self.segment(pair[0], pair[1], ink);
        }
        for joint in cells.windows(3) {
            if let (Some(incoming), Some(outgoing)) = (
                Dir::between(joint[0], joint[1]),
                Dir::between(joint[1], joint[2]),
            ) {
                self.put(joint[1].0, joint[1].1, corner(incoming, outgoing), ink, false);
            }
        }
        if let [.., before, last] = cells.as_slice() {
            self.arrow_head(*before, *last, ink);
        }
    }
}
