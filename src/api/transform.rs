use tracing::{debug, trace};

use crate::core::{
    Axis, ChartView, DirectionMode, DragRect, LinearScale, Point, ScaleLimits, ZoomLimits,
};
use crate::error::ZoomResult;

/// Applies a final drag rectangle to every enabled scale.
///
/// Returns whether any axis range actually changed after limit clamping.
pub fn apply_rect_zoom(
    view: &mut ChartView,
    limits: &ZoomLimits,
    rect: DragRect,
    mode: DirectionMode,
) -> bool {
    let area = view.area();
    let mut changed = false;

    for (id, scale) in view.scales_mut() {
        let enabled = match scale.axis() {
            Axis::X => mode.applies_x(),
            Axis::Y => mode.applies_y(),
        };
        if !enabled {
            continue;
        }

        let (new_min, new_max) = match scale.axis() {
            Axis::X => (
                scale.pixel_to_value(rect.left, area),
                scale.pixel_to_value(rect.right, area),
            ),
            // y pixels grow downward, so the bottom edge carries the lower value.
            Axis::Y => (
                scale.pixel_to_value(rect.bottom, area),
                scale.pixel_to_value(rect.top, area),
            ),
        };

        if update_scale(scale, limits.get(id), new_min, new_max) {
            debug!(scale = id, new_min, new_max, "rect zoom applied");
            changed = true;
        }
    }

    changed
}

/// Scales every enabled axis range by `factor`, anchored at `focal`.
///
/// `factor > 1` zooms in. Returns whether any axis range actually changed.
pub fn apply_focal_zoom(
    view: &mut ChartView,
    limits: &ZoomLimits,
    factor: f64,
    focal: Point,
    mode: DirectionMode,
) -> bool {
    if !factor.is_finite() || factor <= 0.0 {
        return false;
    }

    let area = view.area();
    let mut changed = false;

    for (id, scale) in view.scales_mut() {
        let enabled = match scale.axis() {
            Axis::X => mode.applies_x(),
            Axis::Y => mode.applies_y(),
        };
        if !enabled {
            continue;
        }

        let pixel = match scale.axis() {
            Axis::X => focal.x,
            Axis::Y => focal.y,
        };
        let center = scale.pixel_to_value(pixel, area);
        let (min, max) = scale.range();
        let new_min = center - (center - min) / factor;
        let new_max = center + (max - center) / factor;

        if update_scale(scale, limits.get(id), new_min, new_max) {
            trace!(scale = id, factor, "focal zoom applied");
            changed = true;
        }
    }

    changed
}

/// Shifts every enabled axis range by a pixel delta, sliding flush against
/// limits instead of crossing them.
///
/// Returns whether any axis range actually changed.
pub fn apply_pan(
    view: &mut ChartView,
    limits: &ZoomLimits,
    delta: Point,
    mode: DirectionMode,
) -> bool {
    let area = view.area();
    let mut changed = false;

    for (id, scale) in view.scales_mut() {
        let value_delta = match scale.axis() {
            Axis::X if mode.applies_x() => -delta.x * scale.span() / area.width(),
            Axis::Y if mode.applies_y() => delta.y * scale.span() / area.height(),
            _ => continue,
        };
        if value_delta == 0.0 {
            continue;
        }

        let (min, max) = scale.range();
        let (new_min, new_max) =
            slide_within_limits(scale, limits.get(id), min + value_delta, max + value_delta);

        if update_scale(scale, None, new_min, new_max) {
            trace!(scale = id, value_delta, "pan applied");
            changed = true;
        }
    }

    changed
}

/// Sets one scale's range directly, clamped to its limits.
pub fn zoom_scale(
    view: &mut ChartView,
    limits: &ZoomLimits,
    id: &str,
    range: (f64, f64),
) -> ZoomResult<bool> {
    let scale_limits = limits.get(id).copied();
    let scale = view.require_scale_mut(id)?;
    Ok(update_scale(scale, scale_limits.as_ref(), range.0, range.1))
}

fn resolved_bounds(scale: &LinearScale, limits: Option<&ScaleLimits>) -> (f64, f64, f64) {
    let (original_min, original_max) = scale.original_range();
    match limits {
        Some(limits) => (
            limits.min.resolve(original_min, f64::NEG_INFINITY),
            limits.max.resolve(original_max, f64::INFINITY),
            limits.min_range.unwrap_or(0.0),
        ),
        None => (f64::NEG_INFINITY, f64::INFINITY, 0.0),
    }
}

/// Clamps a candidate range into the scale's limits, growing back to
/// `min_range` around the candidate center when the zoom overshot.
fn clamp_range(
    scale: &LinearScale,
    limits: Option<&ScaleLimits>,
    new_min: f64,
    new_max: f64,
) -> (f64, f64) {
    let (bound_min, bound_max, min_range) = resolved_bounds(scale, limits);

    let mut min = new_min.max(bound_min);
    let mut max = new_max.min(bound_max);

    if max - min < min_range {
        let center = (min + max) / 2.0;
        min = center - min_range / 2.0;
        max = center + min_range / 2.0;
        if min < bound_min {
            max += bound_min - min;
            min = bound_min;
        }
        if max > bound_max {
            min -= max - bound_max;
            max = bound_max;
        }
        min = min.max(bound_min);
    }

    (min, max)
}

/// Keeps the candidate span intact while keeping it inside the limit
/// bounds; a pan that hits a limit stops flush against it.
fn slide_within_limits(
    scale: &LinearScale,
    limits: Option<&ScaleLimits>,
    new_min: f64,
    new_max: f64,
) -> (f64, f64) {
    let (bound_min, bound_max, _) = resolved_bounds(scale, limits);

    let mut min = new_min;
    let mut max = new_max;
    if min < bound_min {
        max += bound_min - min;
        min = bound_min;
    }
    if max > bound_max {
        min -= max - bound_max;
        max = bound_max;
    }
    (min.max(bound_min), max)
}

fn update_scale(
    scale: &mut LinearScale,
    limits: Option<&ScaleLimits>,
    new_min: f64,
    new_max: f64,
) -> bool {
    if !new_min.is_finite() || !new_max.is_finite() {
        return false;
    }

    let (min, max) = clamp_range(scale, limits, new_min, new_max);
    if !min.is_finite() || !max.is_finite() || min >= max {
        return false;
    }
    if (min, max) == scale.range() {
        return false;
    }

    scale.set_range(min, max).is_ok()
}
