use crate::keyboard::{KeyboardLayout, LayoutMode, TemplateError, layout};
use crate::label::{Connector, LabelPlacement, place_labels};
use crate::render::geometry::{Point, Rect};
use crate::render::metrics::Metrics;
use crate::render::surface::{Font, Ink, Surface};
use crate::script::BindingMap;

/// Result of one repaint, kept for inspection.
#[derive(Clone, Debug, Default)]
pub struct OverlayFrame {
    pub viewport: Rect,
    pub layout: KeyboardLayout,
    pub labels: Vec<LabelPlacement>,
}

/// Repaint the whole overlay onto `surface`.
///
/// Stage one lays out every key in the middle of the viewport; stage two
/// places labels for the bound keys into the side margins. Nothing is cached
/// between calls.
pub fn render_overlay<S: Surface>(
    surface: &mut S,
    bindings: &BindingMap,
    mode: LayoutMode,
    metrics: &Metrics,
    help: Option<&str>,
) -> Result<OverlayFrame, TemplateError> {
    let rows = mode.rows()?;

    let viewport = surface.clip().inset(metrics.viewport_margin);
    let keyboard_view = viewport.inset_x(metrics.label_width);
    let layout = layout(&rows, keyboard_view, bindings);

    surface.clear(Ink::Background);

    for key in &layout.keys {
        let body = key.rect.inset(metrics.key_padding);
        let (fill, text) = if key.bound {
            (Ink::KeyActive, Ink::KeyActiveText)
        } else {
            (Ink::KeyIdle, Ink::KeyIdleText)
        };
        surface.fill_rect(body, metrics.key_radius, fill);
        let (dx, dy) = metrics.caption_inset;
        surface.draw_text(&key.label, Point::new(body.x + dx, body.y + dy), Font::Key, text);
        surface.stroke_rect(body, metrics.key_radius, Ink::KeyOutline);
    }

    let labels = {
        let measurer = &*surface;
        place_labels(&layout, bindings, viewport, metrics, |text| {
            measurer.measure_text(text, Font::Label)
        })
    };

    // Labels go last so they sit on top of the keys.
    for label in &labels {
        surface.draw_text(&label.text, label.origin, Font::Label, Ink::Label);
        match &label.connector {
            Connector::Straight { from, to } => surface.draw_line(*from, *to, Ink::Connector),
            Connector::Elbow(points) => surface.draw_polyline(points, Ink::Connector),
        }
    }

    if let Some(help) = help {
        draw_help_bar(surface, viewport, metrics, help);
    }

    tracing::debug!(
        mode = mode.as_str(),
        keys = layout.keys.len(),
        labels = labels.len(),
        key_dim = layout.key_dim,
        "overlay rendered"
    );

    Ok(OverlayFrame {
        viewport,
        layout,
        labels,
    })
}

fn draw_help_bar<S: Surface>(surface: &mut S, viewport: Rect, metrics: &Metrics, help: &str) {
    let width = surface.measure_text(help, Font::Label);
    let height = metrics.help_bar_height();
    let at = Point::new(
        viewport.center_x() - width / 2.0,
        viewport.bottom() - metrics.slot_size,
    );
    surface.fill_rect(Rect::new(at.x, at.y, width, height), 0.0, Ink::HelpBar);
    surface.draw_text(help, at, Font::Label, Ink::HelpText);
}
