use crate::error::ZoomResult;
use crate::render::{OverlayFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_rect_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &OverlayFrame) -> ZoomResult<()> {
        frame.validate()?;
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
