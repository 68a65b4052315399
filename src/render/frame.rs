use smallvec::SmallVec;

use crate::core::ChartArea;
use crate::error::ZoomResult;
use crate::render::{RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one overlay draw pass.
///
/// A range selection produces at most four labels, so the text list is
/// inline-allocated.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    pub area: ChartArea,
    pub rects: Vec<RectPrimitive>,
    pub texts: SmallVec<[TextPrimitive; 4]>,
}

impl OverlayFrame {
    #[must_use]
    pub fn new(area: ChartArea) -> Self {
        Self {
            area,
            rects: Vec::new(),
            texts: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ZoomResult<()> {
        self.area.validate()?;
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.texts.is_empty()
    }
}
