use crate::keyboard::KeyboardLayout;
use crate::label::bank::LabelBank;
use crate::render::geometry::{Point, Rect};
use crate::render::metrics::Metrics;
use crate::script::{Binding, BindingMap};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Connector {
    /// Label sits level with its key.
    Straight { from: Point, to: Point },
    /// Label was pushed below its key: out, down-column, up to the key row, in.
    Elbow([Point; 4]),
}

impl Connector {
    pub fn points(&self) -> Vec<Point> {
        match self {
            Connector::Straight { from, to } => vec![*from, *to],
            Connector::Elbow(points) => points.to_vec(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelPlacement {
    pub key: String,
    pub text: String,
    pub side: Side,
    /// Top-left of the label text.
    pub origin: Point,
    pub width: f32,
    pub connector: Connector,
}

/// Display text for a binding: `[CSA] description`, or the bare description
/// when no modifier is held.
pub fn label_text(binding: &Binding) -> String {
    if binding.modifiers.any() {
        format!("[{}] {}", binding.modifiers.code(), binding.description)
    } else {
        binding.description.clone()
    }
}

/// Place one label per binding of every anchored key.
///
/// Keys are visited in layout order and each binding takes a slot from the
/// bank on its side, so earlier keys win contested slots. `measure` returns
/// the rendered width of label text.
pub fn place_labels<F>(
    layout: &KeyboardLayout,
    bindings: &BindingMap,
    viewport: Rect,
    metrics: &Metrics,
    measure: F,
) -> Vec<LabelPlacement>
where
    F: Fn(&str) -> f32,
{
    let mut left = LabelBank::with_slot_size(viewport.y, viewport.height, metrics.slot_size);
    let mut right = LabelBank::with_slot_size(viewport.y, viewport.height, metrics.slot_size);
    let mid_x = viewport.center_x();
    let clip_left = viewport.x - metrics.viewport_margin;
    let clip_right = viewport.right() + metrics.viewport_margin;

    let mut placements = Vec::new();
    for anchor in &layout.anchors {
        let Some(list) = bindings.get(&anchor.key) else {
            continue;
        };
        let key = anchor.point;
        let key_row_y = key.y + 2.0 * metrics.key_padding;

        for binding in list {
            let text = label_text(binding);
            let width = measure(&text);

            let (side, x, edge_x, bank) = if key.x < mid_x {
                let x = viewport.x + metrics.viewport_margin;
                (Side::Left, x, x + width, &mut left)
            } else {
                let x = viewport.right() - width - metrics.viewport_margin;
                (Side::Right, x, x, &mut right)
            };

            let y = bank.allocate(key_row_y);
            let line_y = y + metrics.line_offset;

            let connector = if y > key.y + layout.key_dim {
                let reach = metrics.label_width + (y - key.y);
                let elbow_x = match side {
                    Side::Left => clip_left + reach,
                    Side::Right => clip_right - reach,
                };
                Connector::Elbow([
                    Point::new(edge_x, line_y),
                    Point::new(elbow_x, line_y),
                    Point::new(elbow_x, key_row_y),
                    Point::new(key.x, key_row_y),
                ])
            } else {
                Connector::Straight {
                    from: Point::new(edge_x, line_y),
                    to: Point::new(key.x, line_y),
                }
            };

            placements.push(LabelPlacement {
                key: anchor.key.clone(),
                text,
                side,
                origin: Point::new(x, y),
                width,
                connector,
            });
        }
    }

    tracing::trace!(
        labels = placements.len(),
        elbows = placements
            .iter()
            .filter(|p| matches!(p.connector, Connector::Elbow(_)))
            .count(),
        "labels placed"
    );
    placements
}
