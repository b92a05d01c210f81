use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::app::{StatusKind, StatusMessage};
use crate::keyboard::LayoutMode;
use crate::ui::theme::Theme;

const HINTS: &str =
    " [o] Open  [r] Reload  [k] Keyboard  [F11] Chrome  [?] About  [q] Quit ";

/// Title row: program name, loaded script and binding counts.
pub struct Header<'a> {
    pub title: &'a str,
    pub keys: usize,
    pub bindings: usize,
    pub mode: LayoutMode,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let base = Style::default().fg(colors.header_fg()).bg(colors.header_bg());
        let info = format!(
            " {} | {} keys, {} hotkeys | {} ",
            self.title,
            self.keys,
            self.bindings,
            self.mode.as_str()
        );
        Paragraph::new(Line::from(vec![
            Span::styled(
                " ahkmap ",
                base.fg(colors.accent()).add_modifier(Modifier::BOLD),
            ),
            Span::styled(info, base),
        ]))
        .style(base)
        .render(area, buf);
    }
}

/// Bottom row: the last status message if any, key hints otherwise.
pub struct Footer<'a> {
    pub status: Option<&'a StatusMessage>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let line = match self.status {
            Some(msg) => {
                let fg = match msg.kind {
                    StatusKind::Info => colors.success(),
                    StatusKind::Error => colors.error(),
                };
                Line::from(Span::styled(format!(" {}", msg.text), Style::default().fg(fg)))
            }
            None => Line::from(Span::styled(HINTS, Style::default().fg(colors.text_dim()))),
        };
        Paragraph::new(line)
            .style(Style::default().bg(colors.bg()))
            .render(area, buf);
    }
}
