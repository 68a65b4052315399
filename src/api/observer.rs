use crate::core::{ChartView, DataRange};
use crate::interaction::InputEvent;

/// Host-side hooks for gesture lifecycle events.
///
/// Every method has a no-op default, so an unset callback is a no-op by
/// construction. The `*_start` hooks may veto a gesture by returning
/// `false`; a veto aborts the gesture and fires the matching rejection hook.
/// Rejection hooks receive the triggering event; they fire when a gesture's
/// modifier predicate is not satisfied or a start veto occurs, never as an
/// error path.
#[allow(unused_variables)]
pub trait ZoomObserver {
    /// Consulted before a drag-zoom press is accepted and before every
    /// wheel event applies.
    fn on_zoom_start(&mut self, event: &InputEvent) -> bool {
        true
    }

    /// Scale bounds changed due to an interactive zoom step.
    fn on_zoom(&mut self, view: &ChartView) {}

    fn on_zoom_complete(&mut self) {}

    fn on_zoom_rejected(&mut self, event: &InputEvent) {}

    fn on_pan_start(&mut self, event: &InputEvent) -> bool {
        true
    }

    /// Scale bounds changed due to an interactive pan step.
    fn on_pan(&mut self, view: &ChartView) {}

    fn on_pan_complete(&mut self) {}

    fn on_pan_rejected(&mut self, event: &InputEvent) {}

    /// A completed range selection, with rectangle edges mapped to data
    /// space.
    fn on_range_selected(&mut self, range: DataRange) {}

    /// The controller wants the host to repaint. Mid-gesture requests pass
    /// `skip_animation = true` so the overlay tracks the pointer without
    /// transition lag.
    fn on_redraw_requested(&mut self, skip_animation: bool) {}
}

/// Observer that ignores every hook.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ZoomObserver for NoopObserver {}
