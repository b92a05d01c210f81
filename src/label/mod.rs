pub mod bank;
pub mod placement;

pub use bank::LabelBank;
pub use placement::{Connector, LabelPlacement, Side, label_text, place_labels};
