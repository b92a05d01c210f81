use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::ui::theme::Theme;

pub const BUILD_STRING: &str = concat!("Version ", env!("CARGO_PKG_VERSION"), " - terminal edition");

pub struct About<'a> {
    theme: &'a Theme,
}

impl<'a> About<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for About<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" About ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(
                env!("CARGO_PKG_NAME"),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Hotkey map for AutoHotkey scripts",
                Style::default().fg(colors.fg()),
            )),
            Line::from(Span::styled(BUILD_STRING, Style::default().fg(colors.text_dim()))),
            Line::default(),
            Line::from(Span::styled(
                "[any key] Close",
                Style::default().fg(colors.text_dim()),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
