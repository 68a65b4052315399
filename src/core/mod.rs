mod geometry;
mod limits;
mod scale;
mod types;

pub use geometry::{
    DataRange, DataSpan, DirectionMode, DragKind, DragRect, compute_drag_rect,
    directional_distance,
};
pub use limits::{LimitBound, ScaleLimits, ZoomLimits};
pub use scale::{Axis, ChartView, LinearScale};
pub use types::{ChartArea, Point};
