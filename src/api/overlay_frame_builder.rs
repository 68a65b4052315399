use crate::core::{ChartView, DragKind, DragRect, compute_drag_rect};
use crate::interaction::InteractionState;
use crate::render::{OverlayFrame, RectPrimitive, StrokeStyle, TextHAlign, TextPrimitive};

use super::options::{DrawPhase, RangeLabelOptions, ZoomOptions};

/// Materializes the selection overlay for one draw-phase invocation.
///
/// Produces an empty frame when no drag is in progress or the configured
/// draw time does not match `phase`.
pub(super) fn build_overlay_frame(
    view: &ChartView,
    options: &ZoomOptions,
    state: InteractionState,
    phase: DrawPhase,
) -> OverlayFrame {
    let frame = OverlayFrame::new(view.area());

    let (Some(kind), Some(start), Some(end)) =
        (state.drag_mode(), state.drag_start(), state.drag_end())
    else {
        return frame;
    };

    let (draw_time, fill, border_color, border_width) = match kind {
        DragKind::Drag => (
            options.drag.draw_time,
            options.drag.background_color,
            options.drag.border_color,
            options.drag.border_width,
        ),
        DragKind::Range => (
            options.range.draw_time,
            options.range.background_color,
            options.range.border_color,
            options.range.border_width,
        ),
    };
    if draw_time != phase {
        return frame;
    }

    // Mode sources are re-resolved on every redraw, not cached per gesture.
    let (mode, mirroring) = match kind {
        DragKind::Drag => (options.mode.resolve(view), false),
        DragKind::Range => (options.range.mode.resolve(view), options.range.mirroring),
    };

    let rect = compute_drag_rect(view, mode, kind, mirroring, start, end);

    let mut primitive = RectPrimitive::new(rect.left, rect.top, rect.right, rect.bottom, fill);
    if border_width > 0.0 {
        primitive = primitive.with_stroke(StrokeStyle {
            color: border_color,
            width: border_width,
        });
    }
    let mut frame = frame.with_rect(primitive);

    if kind == DragKind::Range {
        append_range_labels(&mut frame, rect, options.range.label);
    }

    frame
}

/// Up to four labels sit outside the rectangle's edges: lower bounds are
/// floored, upper bounds ceiled, then run through the optional formatter.
fn append_range_labels(frame: &mut OverlayFrame, rect: DragRect, label: RangeLabelOptions) {
    let Some(range) = rect.data_range else {
        return;
    };

    let mid_y = (rect.top + rect.bottom) / 2.0;
    let mid_x = (rect.left + rect.right) / 2.0;

    if let Some(span) = range.x {
        frame.texts.push(bound_label(
            span.lower().floor(),
            rect.left - label.margin,
            mid_y,
            TextHAlign::Right,
            label,
        ));
        frame.texts.push(bound_label(
            span.upper().ceil(),
            rect.right + label.margin,
            mid_y,
            TextHAlign::Left,
            label,
        ));
    }

    if let Some(span) = range.y {
        frame.texts.push(bound_label(
            span.upper().ceil(),
            mid_x,
            rect.top - label.margin,
            TextHAlign::Center,
            label,
        ));
        frame.texts.push(bound_label(
            span.lower().floor(),
            mid_x,
            rect.bottom + label.margin + label.font_size,
            TextHAlign::Center,
            label,
        ));
    }
}

fn bound_label(
    value: f64,
    x: f64,
    y: f64,
    h_align: TextHAlign,
    label: RangeLabelOptions,
) -> TextPrimitive {
    let text = match label.formatter {
        Some(format) => format(value),
        None => format!("{value}"),
    };
    TextPrimitive::new(text, x, y, label.font_size, label.font_color, h_align)
}
