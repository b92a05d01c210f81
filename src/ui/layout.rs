use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions. Header and footer exist only while chrome is shown.
pub struct AppLayout {
    pub header: Option<Rect>,
    pub main: Rect,
    pub footer: Option<Rect>,
}

impl AppLayout {
    pub fn new(area: Rect, show_chrome: bool) -> Self {
        if !show_chrome {
            return Self {
                header: None,
                main: area,
                footer: None,
            };
        }

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: Some(vertical[0]),
            main: vertical[1],
            footer: Some(vertical[2]),
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 40;
    const MIN_POPUP_HEIGHT: u16 = 7;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
