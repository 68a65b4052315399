use serde::{Deserialize, Serialize};

use crate::error::{ZoomError, ZoomResult};

/// Pixel coordinates relative to the chart's drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The chart's plottable pixel rectangle, excluding axes and legends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ChartArea {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    pub fn validate(self) -> ZoomResult<()> {
        let finite = self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite();
        if !finite || self.left >= self.right || self.top >= self.bottom {
            return Err(ZoomError::InvalidChartArea {
                left: self.left,
                top: self.top,
                right: self.right,
                bottom: self.bottom,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// Center of the plottable area, used as the default focal point for
    /// programmatic zoom.
    #[must_use]
    pub fn center(self) -> Point {
        Point::new(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }
}
