use crate::label::bank::SLOT_SIZE;

/// Visual constants of the overlay, in logical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    /// Gap between the clip rectangle and the viewport.
    pub viewport_margin: f32,
    /// Inset of a key's drawn box inside its layout cell.
    pub key_padding: f32,
    pub key_radius: f32,
    /// Width reserved for labels on each side of the keyboard.
    pub label_width: f32,
    /// Height of one label bank slot.
    pub slot_size: f32,
    /// Offset from a label's top to its connector line.
    pub line_offset: f32,
    /// Offset of a key's caption from the top-left of its drawn box.
    pub caption_inset: (f32, f32),
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            viewport_margin: 8.0,
            key_padding: 2.0,
            key_radius: 5.0,
            label_width: 200.0,
            slot_size: SLOT_SIZE,
            line_offset: 8.0,
            caption_inset: (0.0, 0.0),
        }
    }
}

impl Metrics {
    /// Metrics for a character grid where one text row is two logical units
    /// tall and one column is one unit wide.
    pub fn terminal(label_width: u16) -> Self {
        Self {
            viewport_margin: 2.0,
            key_padding: 0.0,
            key_radius: 1.0,
            label_width: f32::from(label_width),
            slot_size: 2.0,
            line_offset: 1.0,
            // One column and one row in, clear of the key frame.
            caption_inset: (1.0, 2.0),
        }
    }

    /// Height of the help bar at the bottom of the viewport.
    pub fn help_bar_height(&self) -> f32 {
        self.slot_size + self.key_padding
    }
}
