mod frame;
mod null_renderer;
mod primitives;

pub use frame::OverlayFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, RectPrimitive, StrokeStyle, TextHAlign, TextPrimitive};

use crate::error::ZoomResult;

/// Contract implemented by any overlay drawing backend.
///
/// Backends receive a fully materialized, deterministic `OverlayFrame` so
/// drawing code remains isolated from gesture and transform logic.
pub trait Renderer {
    fn render(&mut self, frame: &OverlayFrame) -> ZoomResult<()>;
}
