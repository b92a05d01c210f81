use crate::keyboard::template::{Row, TemplateError, parse_template};
use crate::render::geometry::{Point, Rect};
use crate::script::BindingMap;

#[derive(Clone, Debug, PartialEq)]
pub struct KeyRect {
    pub rect: Rect,
    pub label: String,
    /// True if the script binds this key.
    pub bound: bool,
}

/// Connector target for a bound key: top edge, horizontally centered.
#[derive(Clone, Debug, PartialEq)]
pub struct Anchor {
    /// Lowercase key name, as used in the binding map.
    pub key: String,
    pub point: Point,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyboardLayout {
    pub keys: Vec<KeyRect>,
    /// Side of one square key unit.
    pub key_dim: f32,
    /// Widest row, in key units.
    pub columns: f32,
    /// The centered keyboard block.
    pub bounds: Rect,
    /// Bound keys in layout order, left-to-right then top-to-bottom.
    pub anchors: Vec<Anchor>,
}

impl KeyboardLayout {
    pub fn anchor(&self, key: &str) -> Option<Point> {
        let key = key.to_lowercase();
        self.anchors.iter().find(|a| a.key == key).map(|a| a.point)
    }
}

/// Widest row in key units. Rows may differ in width.
pub fn column_count(rows: &[Row]) -> f32 {
    rows.iter().map(Row::width).fold(0.0, f32::max)
}

/// Parse `template` and lay it out in `view`.
pub fn layout_template(
    template: &str,
    view: Rect,
    bindings: &BindingMap,
) -> Result<KeyboardLayout, TemplateError> {
    let rows = parse_template(template)?;
    Ok(layout(&rows, view, bindings))
}

/// Position every key of `rows` inside `view`.
///
/// Keys are square units of the largest whole size that fits both axes. The
/// block is centered horizontally and top-aligned; short rows start at the
/// block's left edge. A key label appearing twice gets one anchor, owned by
/// its first occurrence.
pub fn layout(rows: &[Row], view: Rect, bindings: &BindingMap) -> KeyboardLayout {
    let columns = column_count(rows);
    if rows.is_empty() || columns <= 0.0 {
        return KeyboardLayout::default();
    }

    let key_width = (view.width / columns).floor();
    let key_height = (view.height / rows.len() as f32).floor();
    let key_dim = key_width.min(key_height).max(0.0);

    let spare = view.width - key_dim * columns;
    let origin_x = view.x + (spare / 2.0).floor();
    let bounds = Rect::new(
        origin_x,
        view.y,
        (key_dim * columns).floor(),
        key_dim * rows.len() as f32,
    );

    let mut keys = Vec::new();
    let mut anchors: Vec<Anchor> = Vec::new();

    for (row_idx, row) in rows.iter().enumerate() {
        let y = view.y + row_idx as f32 * key_dim;
        let mut offset = 0.0;

        for key in &row.keys {
            if !key.is_spacer() {
                let name = key.label.to_lowercase();
                let bound = bindings.contains_key(&name);
                keys.push(KeyRect {
                    rect: Rect::new(
                        (offset * key_dim + origin_x).floor(),
                        y,
                        (key_dim * key.width).floor(),
                        key_dim,
                    ),
                    label: key.label.clone(),
                    bound,
                });

                if bound && !anchors.iter().any(|a| a.key == name) {
                    let center = (offset + key.width / 2.0) * key_dim + origin_x;
                    anchors.push(Anchor {
                        key: name,
                        point: Point::new(center.floor(), y),
                    });
                }
            }
            offset += key.width;
        }
    }

    tracing::trace!(
        keys = keys.len(),
        anchors = anchors.len(),
        key_dim,
        "keyboard laid out"
    );

    KeyboardLayout {
        keys,
        key_dim,
        columns,
        bounds,
        anchors,
    }
}
