use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::keyboard::LayoutMode;
use crate::render::{Metrics, render_overlay};
use crate::script::BindingMap;
use crate::ui::buffer_surface::BufferSurface;
use crate::ui::theme::Theme;

const MIN_WIDTH: u16 = 32;
const MIN_HEIGHT: u16 = 8;

/// The keyboard overlay: keys in the middle, labels in the side margins.
pub struct KeymapView<'a> {
    bindings: &'a BindingMap,
    mode: LayoutMode,
    theme: &'a Theme,
    label_width: u16,
    help: Option<&'a str>,
}

impl<'a> KeymapView<'a> {
    pub fn new(bindings: &'a BindingMap, mode: LayoutMode, theme: &'a Theme) -> Self {
        Self {
            bindings,
            mode,
            theme,
            label_width: 24,
            help: None,
        }
    }

    /// Preferred label column width in cells; shrinks on narrow terminals.
    pub fn label_width(mut self, cells: u16) -> Self {
        self.label_width = cells;
        self
    }

    pub fn help(mut self, text: &'a str) -> Self {
        self.help = Some(text);
        self
    }

    fn metrics(&self, area: Rect) -> Metrics {
        Metrics::terminal(self.label_width.min(area.width / 4))
    }
}

impl Widget for KeymapView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            let msg = format!("Terminal too small ({}x{})", area.width, area.height);
            Paragraph::new(msg)
                .style(Style::default().fg(colors.text_dim()).bg(colors.bg()))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        let metrics = self.metrics(area);
        let mut surface = BufferSurface::new(buf, area, self.theme);
        if let Err(err) = render_overlay(&mut surface, self.bindings, self.mode, &metrics, self.help)
        {
            tracing::error!(mode = self.mode.as_str(), %err, "keyboard template rejected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_str;

    fn theme() -> Theme {
        Theme {
            name: "test".to_string(),
            colors: crate::ui::theme::ThemeColors::default(),
        }
    }

    fn screen_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_bound_key_label_appears_on_screen() {
        let theme = theme();
        let bindings = parse_str("; Walk\nw::Send w\n; Jump\n^Space::Send j");
        let area = Rect::new(0, 0, 160, 40);
        let mut buf = Buffer::empty(area);
        KeymapView::new(&bindings, LayoutMode::Full, &theme)
            .help("Esc - exit")
            .render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains("Walk"));
        assert!(text.contains("[C] Jump"));
        assert!(text.contains("Esc - exit"));
    }

    #[test]
    fn test_small_area_shows_message() {
        let theme = theme();
        let bindings = BindingMap::new();
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        KeymapView::new(&bindings, LayoutMode::Compact, &theme).render(area, &mut buf);
        assert!(screen_text(&buf).contains("too small"));
    }

    #[test]
    fn test_label_width_capped_by_area() {
        let theme = theme();
        let bindings = BindingMap::new();
        let view = KeymapView::new(&bindings, LayoutMode::Full, &theme).label_width(40);
        assert_eq!(view.metrics(Rect::new(0, 0, 100, 30)).label_width, 25.0);
        assert_eq!(view.metrics(Rect::new(0, 0, 200, 30)).label_width, 40.0);
    }
}
