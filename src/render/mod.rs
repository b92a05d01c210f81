pub mod geometry;
pub mod metrics;
pub mod overlay;
pub mod recording;
pub mod surface;

pub use geometry::{Point, Rect};
pub use metrics::Metrics;
pub use overlay::{OverlayFrame, render_overlay};
pub use surface::{Font, Ink, Surface};
