use serde::{Deserialize, Serialize};

use crate::core::scale::{Axis, ChartView};
use crate::core::types::Point;

/// Which axes a gesture is permitted to affect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionMode {
    X,
    Y,
    Xy,
}

impl DirectionMode {
    #[must_use]
    pub fn applies_x(self) -> bool {
        matches!(self, Self::X | Self::Xy)
    }

    #[must_use]
    pub fn applies_y(self) -> bool {
        matches!(self, Self::Y | Self::Xy)
    }
}

/// Classification of an active drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragKind {
    /// Zoom-by-rectangle.
    Drag,
    /// Range selection.
    Range,
}

/// Data-space interval produced by mapping rectangle edges through a scale.
///
/// `start` corresponds to the rectangle's left (x) or top (y) edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataSpan {
    pub start: f64,
    pub end: f64,
}

impl DataSpan {
    #[must_use]
    pub fn lower(self) -> f64 {
        self.start.min(self.end)
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.start.max(self.end)
    }
}

/// Data-space ranges for the directions a range selection covers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    pub x: Option<DataSpan>,
    pub y: Option<DataSpan>,
}

/// Transient rectangle produced by the geometry engine.
///
/// Pure value, recomputed per call and never mutated in place. Coordinates
/// satisfy `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub zoom_factor_x: f64,
    pub zoom_factor_y: f64,
    pub data_range: Option<DataRange>,
}

impl DragRect {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// Computes the live gesture rectangle from two raw input points.
///
/// Enabled directions take the min/max of the two points; a disabled
/// direction keeps the full plottable extent. For mirrored range selection
/// the span is doubled and the rectangle re-centered on the gesture's start
/// coordinate, so the mirrored half reflects the dragged half across the
/// starting edge.
#[must_use]
pub fn compute_drag_rect(
    view: &ChartView,
    mode: DirectionMode,
    kind: DragKind,
    mirroring: bool,
    start: Point,
    end: Point,
) -> DragRect {
    let area = view.area();

    let (mut left, mut right) = if mode.applies_x() {
        (start.x.min(end.x), start.x.max(end.x))
    } else {
        (area.left, area.right)
    };
    let (mut top, mut bottom) = if mode.applies_y() {
        (start.y.min(end.y), start.y.max(end.y))
    } else {
        (area.top, area.bottom)
    };

    if kind == DragKind::Range && mirroring {
        if mode.applies_x() {
            let span = right - left;
            if start.x <= end.x {
                left -= span;
            } else {
                right += span;
            }
        }
        if mode.applies_y() {
            let span = bottom - top;
            if start.y <= end.y {
                top -= span;
            } else {
                bottom += span;
            }
        }
    }

    let zoom_factor_x = extent_zoom_factor(mode.applies_x(), right - left, area.width());
    let zoom_factor_y = extent_zoom_factor(mode.applies_y(), bottom - top, area.height());

    let data_range = (kind == DragKind::Range).then(|| DataRange {
        x: mode.applies_x().then(|| map_span(view, Axis::X, left, right)).flatten(),
        y: mode.applies_y().then(|| map_span(view, Axis::Y, top, bottom)).flatten(),
    });

    DragRect {
        left,
        top,
        right,
        bottom,
        zoom_factor_x,
        zoom_factor_y,
        data_range,
    }
}

fn extent_zoom_factor(enabled: bool, selected: f64, full: f64) -> f64 {
    if enabled && selected != 0.0 {
        1.0 + (full - selected) / full
    } else {
        1.0
    }
}

fn map_span(view: &ChartView, axis: Axis, edge_start: f64, edge_end: f64) -> Option<DataSpan> {
    let start = view.pixel_to_value(axis, edge_start)?;
    let end = view.pixel_to_value(axis, edge_end)?;
    Some(DataSpan { start, end })
}

/// Euclidean pixel distance between two points measured over the enabled
/// directions only.
#[must_use]
pub fn directional_distance(mode: DirectionMode, a: Point, b: Point) -> f64 {
    let dx = if mode.applies_x() { b.x - a.x } else { 0.0 };
    let dy = if mode.applies_y() { b.y - a.y } else { 0.0 };
    (dx * dx + dy * dy).sqrt()
}
