pub mod layout;
pub mod template;

pub use layout::{Anchor, KeyRect, KeyboardLayout, column_count, layout, layout_template};
pub use template::{KeySpec, LayoutMode, Row, TemplateError, parse_template};
