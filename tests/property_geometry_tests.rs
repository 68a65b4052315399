mod common;

use chart_zoom::core::{DirectionMode, DragKind, Point, compute_drag_rect};
use proptest::prelude::*;

use common::view_400x300;

proptest! {
    #[test]
    fn rect_is_normalized_for_any_point_pair(
        ax in 0.0f64..400.0,
        ay in 0.0f64..300.0,
        bx in 0.0f64..400.0,
        by in 0.0f64..300.0,
    ) {
        let view = view_400x300();
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);

        let rect = compute_drag_rect(&view, DirectionMode::Xy, DragKind::Drag, false, a, b);
        prop_assert!(rect.left <= rect.right);
        prop_assert!(rect.top <= rect.bottom);
    }

    #[test]
    fn rect_edges_are_swap_invariant(
        ax in 0.0f64..400.0,
        ay in 0.0f64..300.0,
        bx in 0.0f64..400.0,
        by in 0.0f64..300.0,
    ) {
        let view = view_400x300();
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);

        let forward = compute_drag_rect(&view, DirectionMode::Xy, DragKind::Drag, false, a, b);
        let swapped = compute_drag_rect(&view, DirectionMode::Xy, DragKind::Drag, false, b, a);
        prop_assert_eq!(forward.left, swapped.left);
        prop_assert_eq!(forward.right, swapped.right);
        prop_assert_eq!(forward.top, swapped.top);
        prop_assert_eq!(forward.bottom, swapped.bottom);
    }

    #[test]
    fn mirrored_range_doubles_the_span_and_pins_the_start(
        ax in 0.0f64..400.0,
        bx in 0.0f64..400.0,
    ) {
        let view = view_400x300();
        let a = Point::new(ax, 10.0);
        let b = Point::new(bx, 10.0);
        let span = (bx - ax).abs();

        let rect = compute_drag_rect(&view, DirectionMode::X, DragKind::Range, true, a, b);
        prop_assert!((rect.width() - 2.0 * span).abs() <= 1e-9);
        // The start coordinate sits at the rectangle's center.
        prop_assert!(((rect.left + rect.right) / 2.0 - ax).abs() <= 1e-9);
    }
}
