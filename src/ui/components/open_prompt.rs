use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// Popup asking for the path of a script to load.
pub struct OpenPrompt<'a> {
    input: &'a LineInput,
    theme: &'a Theme,
}

impl<'a> OpenPrompt<'a> {
    pub fn new(input: &'a LineInput, theme: &'a Theme) -> Self {
        Self { input, theme }
    }
}

impl Widget for OpenPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" Open script ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let (before, cursor, after) = self.input.render_parts();
        let text_style = Style::default().fg(colors.fg());
        let cursor_style = Style::default()
            .fg(colors.bg())
            .bg(colors.fg())
            .add_modifier(Modifier::BOLD);
        let cursor_text = cursor.map_or_else(|| " ".to_string(), |ch| ch.to_string());

        let mut lines = vec![
            Line::from(Span::styled(
                "Path:",
                Style::default().fg(colors.text_dim()),
            )),
            Line::from(vec![
                Span::styled(before, text_style),
                Span::styled(cursor_text, cursor_style),
                Span::styled(after, text_style),
            ]),
            Line::default(),
        ];
        if self.input.completion_error {
            lines.push(Line::from(Span::styled(
                "Cannot read that directory",
                Style::default().fg(colors.error()),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "[Tab] Complete  [Enter] Open  [Esc] Cancel",
                Style::default().fg(colors.text_dim()),
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
