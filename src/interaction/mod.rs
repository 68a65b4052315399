mod events;
mod gate;
mod listeners;
mod timers;

pub use events::{EventKind, EventOutcome, InputEvent};
pub use gate::{ModifierKey, Modifiers, modifier_blocked, modifier_pressed};
pub use listeners::ListenerRegistry;
pub use timers::OneShot;

use crate::core::{DragKind, Point};

/// Per-chart gesture state owned by the interaction controller.
///
/// Invariants: `drag_end` is set only while `drag_start` is, and `drag_mode`
/// is `None` whenever both points are `None`. Transitions go through the
/// methods below so the invariants cannot be broken from outside.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    drag_mode: Option<DragKind>,
    drag_start: Option<Point>,
    drag_end: Option<Point>,
    dragging: bool,
    panning: bool,
}

impl InteractionState {
    #[must_use]
    pub fn drag_mode(self) -> Option<DragKind> {
        self.drag_mode
    }

    #[must_use]
    pub fn drag_start(self) -> Option<Point> {
        self.drag_start
    }

    #[must_use]
    pub fn drag_end(self) -> Option<Point> {
        self.drag_end
    }

    #[must_use]
    pub fn dragging(self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn panning(self) -> bool {
        self.panning
    }

    /// A drag is pending from press until release or cancel.
    #[must_use]
    pub fn drag_pending(self) -> bool {
        self.drag_start.is_some()
    }

    pub fn begin_drag(&mut self, kind: DragKind, start: Point) {
        self.drag_mode = Some(kind);
        self.drag_start = Some(start);
        self.drag_end = None;
    }

    /// Updates the live end point; no-op when no drag is pending.
    pub fn update_drag(&mut self, end: Point) {
        if self.drag_start.is_some() {
            self.drag_end = Some(end);
            self.dragging = true;
        }
    }

    /// Clears the pending drag points and mode. The `dragging` flag is left
    /// untouched; completion debounces it separately from cancellation.
    pub fn clear_drag(&mut self) {
        self.drag_mode = None;
        self.drag_start = None;
        self.drag_end = None;
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn begin_pan(&mut self) {
        self.panning = true;
    }

    pub fn end_pan(&mut self) {
        self.panning = false;
    }

    /// Full reset on detach.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
