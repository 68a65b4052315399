//! Interaction controller tying gesture capture, geometry, and range
//! transforms together.
//!
//! One [`ZoomController`] exists per chart view; there is no ambient
//! registry. Host lifecycle maps onto explicit calls: construction attaches
//! listeners, [`ZoomController::handle_event`] sits behind the host's event
//! loop, [`ZoomController::set_options`] re-syncs subscriptions before an
//! update pass, [`ZoomController::overlay_frame`] serves the draw-phase
//! hooks, and [`ZoomController::detach`] tears everything down.

mod observer;
mod options;
mod overlay_frame_builder;
mod transform;

pub use observer::{NoopObserver, ZoomObserver};
pub use options::{
    DragOptions, DrawPhase, ModeSource, PanOptions, PinchOptions, RangeLabelOptions,
    RangeOptions, WheelOptions, ZoomOptions,
};
pub use transform::{apply_focal_zoom, apply_pan, apply_rect_zoom, zoom_scale};

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{
    ChartView, DirectionMode, DragKind, Point, compute_drag_rect, directional_distance,
};
use crate::error::ZoomResult;
use crate::interaction::{
    EventKind, EventOutcome, InputEvent, InteractionState, ListenerRegistry, Modifiers, OneShot,
    modifier_blocked, modifier_pressed,
};
use crate::render::OverlayFrame;

/// Delay before a completed drag re-enables click handling, guarding
/// against spurious click-through right after release.
const CLICK_REARM_DELAY_MS: u64 = 500;

/// Debounce window coalescing a burst of wheel events into one completion
/// callback.
const WHEEL_COMPLETE_DEBOUNCE_MS: u64 = 250;

/// Zoom ratio summary across all scales: `original span / current span`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel {
    pub min: f64,
    pub max: f64,
}

impl ZoomLevel {
    /// The shared ratio when every scale is zoomed equally.
    #[must_use]
    pub fn uniform(self) -> Option<f64> {
        (self.min == self.max).then_some(self.min)
    }
}

enum GestureStart {
    Drag(DragKind),
    Pan,
}

/// Per-chart interaction controller.
///
/// Owns the gesture state machine, the listener registry, the debounce
/// timers, and the observer hooks. All timing is driven by the caller's
/// logical clock (`now_ms`), keeping the controller deterministic.
pub struct ZoomController {
    view: ChartView,
    options: ZoomOptions,
    state: InteractionState,
    listeners: ListenerRegistry,
    click_rearm: OneShot,
    wheel_done: OneShot,
    wheel_changed: bool,
    pan_anchor: Option<Point>,
    pan_engaged: bool,
    observer: Box<dyn ZoomObserver>,
}

impl ZoomController {
    #[must_use]
    pub fn new(view: ChartView, options: ZoomOptions, observer: Box<dyn ZoomObserver>) -> Self {
        let mut controller = Self {
            view,
            options,
            state: InteractionState::default(),
            listeners: ListenerRegistry::new(),
            click_rearm: OneShot::new(),
            wheel_done: OneShot::new(),
            wheel_changed: false,
            pan_anchor: None,
            pan_engaged: false,
            observer,
        };
        controller.sync_listeners();
        controller
    }

    #[must_use]
    pub fn view(&self) -> &ChartView {
        &self.view
    }

    #[must_use]
    pub fn options(&self) -> &ZoomOptions {
        &self.options
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Replaces the configuration and synchronously re-syncs listeners.
    ///
    /// Disabling the feature that owns the active gesture cancels it and
    /// removes its subordinate move/keydown listeners, even while other
    /// pointer gestures stay enabled.
    pub fn set_options(&mut self, options: ZoomOptions) {
        self.options = options;
        self.sync_listeners();

        let drag_disabled = match self.state.drag_mode() {
            Some(DragKind::Drag) => !self.options.drag.enabled,
            Some(DragKind::Range) => !self.options.range.enabled,
            None => false,
        };
        let pan_disabled = self.state.panning() && !self.options.pan.enabled;
        if drag_disabled || pan_disabled {
            self.state.clear_drag();
            self.state.end_pan();
            self.state.set_dragging(false);
            self.pan_anchor = None;
            self.pan_engaged = false;
            self.listeners.detach(EventKind::PointerMove);
            self.listeners.detach(EventKind::KeyDown);
        }
        if !self.pointer_gestures_enabled() {
            self.click_rearm.cancel();
        }
        if !self.options.wheel.enabled {
            self.wheel_done.cancel();
            self.wheel_changed = false;
        }
    }

    /// Detaches every listener and resets gesture state. Idempotent.
    pub fn detach(&mut self) {
        self.listeners.clear();
        self.state.reset();
        self.click_rearm.cancel();
        self.wheel_done.cancel();
        self.wheel_changed = false;
        self.pan_anchor = None;
        self.pan_engaged = false;
    }

    /// Fires any due timers against the supplied logical clock.
    pub fn poll_timers(&mut self, now_ms: u64) {
        if self.click_rearm.fire_due(now_ms) {
            self.state.set_dragging(false);
        }
        if self.wheel_done.fire_due(now_ms) && self.wheel_changed {
            self.wheel_changed = false;
            self.observer.on_zoom_complete();
        }
    }

    /// Routes one raw input event through the gesture state machine.
    ///
    /// Returns whether the host should treat the event as intercepted.
    /// Events whose kind has no attached listener pass through untouched.
    pub fn handle_event(&mut self, event: InputEvent, now_ms: u64) -> EventOutcome {
        self.poll_timers(now_ms);

        if !self.listeners.is_attached(event.kind()) {
            return EventOutcome::Passthrough;
        }

        match event {
            InputEvent::PointerDown {
                point,
                modifiers,
                primary_button,
            } => self.on_pointer_down(event, point, modifiers, primary_button),
            InputEvent::PointerMove { point, .. } => self.on_pointer_move(point),
            InputEvent::PointerUp { point, .. } => self.on_pointer_up(point, now_ms),
            InputEvent::Wheel {
                point,
                delta_y,
                modifiers,
            } => self.on_wheel(event, point, delta_y, modifiers, now_ms),
            InputEvent::EscapeKey => self.on_escape(),
        }
    }

    /// Pans every enabled scale by a pixel delta. Returns whether any range
    /// changed.
    pub fn pan(&mut self, delta: Point, mode: Option<DirectionMode>) -> bool {
        let mode = mode.unwrap_or_else(|| self.options.pan.mode.resolve(&self.view));
        let changed = apply_pan(&mut self.view, &self.options.limits, delta, mode);
        if changed {
            self.observer.on_redraw_requested(false);
        }
        changed
    }

    /// Zooms every enabled scale by `factor` (`> 1` zooms in), anchored at
    /// the plottable area's center.
    pub fn zoom(&mut self, factor: f64) -> bool {
        let mode = self.options.mode.resolve(&self.view);
        let focal = self.view.area().center();
        let changed =
            apply_focal_zoom(&mut self.view, &self.options.limits, factor, focal, mode);
        if changed {
            self.observer.on_redraw_requested(false);
        }
        changed
    }

    /// Zooms to the rectangle spanned by two corner points.
    pub fn zoom_rect(&mut self, a: Point, b: Point) -> bool {
        let mode = self.options.mode.resolve(&self.view);
        let rect = compute_drag_rect(&self.view, mode, DragKind::Drag, false, a, b);
        let changed = apply_rect_zoom(&mut self.view, &self.options.limits, rect, mode);
        if changed {
            self.observer.on_redraw_requested(false);
        }
        changed
    }

    /// Sets one scale's visible range directly, clamped to its limits.
    pub fn zoom_scale(&mut self, id: &str, range: (f64, f64)) -> ZoomResult<bool> {
        let changed = zoom_scale(&mut self.view, &self.options.limits, id, range)?;
        if changed {
            self.observer.on_redraw_requested(false);
        }
        Ok(changed)
    }

    /// Restores every scale to its original bounds. Returns whether anything
    /// changed.
    pub fn reset_zoom(&mut self) -> bool {
        let changed = self.is_zoomed_or_panned();
        for (_, scale) in self.view.scales_mut() {
            scale.reset_range();
        }
        if changed {
            self.observer.on_redraw_requested(false);
        }
        changed
    }

    #[must_use]
    pub fn zoom_level(&self) -> ZoomLevel {
        let mut level = ZoomLevel { min: 1.0, max: 1.0 };
        let mut first = true;
        for (_, scale) in self.view.scales() {
            let (original_min, original_max) = scale.original_range();
            let ratio = (original_max - original_min) / scale.span();
            if first {
                level = ZoomLevel {
                    min: ratio,
                    max: ratio,
                };
                first = false;
            } else {
                level.min = level.min.min(ratio);
                level.max = level.max.max(ratio);
            }
        }
        level
    }

    /// Bounds each scale was created with, keyed by scale id.
    #[must_use]
    pub fn initial_scale_bounds(&self) -> IndexMap<String, (f64, f64)> {
        self.view
            .scales()
            .map(|(id, scale)| (id.to_owned(), scale.original_range()))
            .collect()
    }

    #[must_use]
    pub fn is_zoomed_or_panned(&self) -> bool {
        self.view
            .scales()
            .any(|(_, scale)| scale.is_zoomed_or_panned())
    }

    /// Overlay scene for one draw-phase hook. Empty unless a drag is live
    /// and its configured draw time matches `phase`.
    #[must_use]
    pub fn overlay_frame(&self, phase: DrawPhase) -> OverlayFrame {
        overlay_frame_builder::build_overlay_frame(&self.view, &self.options, self.state, phase)
    }

    fn pointer_gestures_enabled(&self) -> bool {
        self.options.drag.enabled || self.options.range.enabled || self.options.pan.enabled
    }

    fn sync_listeners(&mut self) {
        let pointer = self.pointer_gestures_enabled();
        self.listeners.sync(EventKind::PointerDown, pointer);
        self.listeners.sync(EventKind::PointerUp, pointer);
        self.listeners.sync(EventKind::Wheel, self.options.wheel.enabled);
    }

    /// Picks the gesture whose modifier predicate is satisfied. Any gesture
    /// requiring a specific key outranks one that accepts any modifier
    /// state, so `range` with its alt default wins over unmodified `drag`,
    /// and a shift-keyed `pan` claims a shift press before a modifier-less
    /// `drag` can.
    fn select_gesture(&self, modifiers: Modifiers) -> Option<GestureStart> {
        let range = &self.options.range;
        let drag = &self.options.drag;
        let pan = &self.options.pan;

        if range.enabled
            && range.modifier_key.is_some()
            && modifier_pressed(range.modifier_key, modifiers)
        {
            return Some(GestureStart::Drag(DragKind::Range));
        }
        if drag.enabled
            && drag.modifier_key.is_some()
            && modifier_pressed(drag.modifier_key, modifiers)
        {
            return Some(GestureStart::Drag(DragKind::Drag));
        }
        if pan.enabled
            && pan.modifier_key.is_some()
            && modifier_pressed(pan.modifier_key, modifiers)
        {
            return Some(GestureStart::Pan);
        }
        if drag.enabled && drag.modifier_key.is_none() {
            return Some(GestureStart::Drag(DragKind::Drag));
        }
        if range.enabled && range.modifier_key.is_none() {
            return Some(GestureStart::Drag(DragKind::Range));
        }
        if pan.enabled && pan.modifier_key.is_none() {
            return Some(GestureStart::Pan);
        }
        None
    }

    fn on_pointer_down(
        &mut self,
        event: InputEvent,
        point: Point,
        modifiers: Modifiers,
        primary_button: bool,
    ) -> EventOutcome {
        if !primary_button {
            return EventOutcome::Passthrough;
        }
        // The post-gesture rearm window swallows clicks entirely so the host
        // never sees click-through right after a release.
        if self.state.dragging() && !self.state.drag_pending() {
            return EventOutcome::Consumed;
        }

        let Some(gesture) = self.select_gesture(modifiers) else {
            if self.options.drag.enabled || self.options.range.enabled {
                self.observer.on_zoom_rejected(&event);
            }
            if self.options.pan.enabled {
                self.observer.on_pan_rejected(&event);
            }
            return EventOutcome::Passthrough;
        };

        match gesture {
            GestureStart::Drag(kind) => {
                if !self.observer.on_zoom_start(&event) {
                    self.observer.on_zoom_rejected(&event);
                    return EventOutcome::Passthrough;
                }
                trace!(?kind, x = point.x, y = point.y, "drag gesture started");
                self.state.begin_drag(kind, point);
                self.listeners.attach(EventKind::PointerMove);
                self.listeners.attach(EventKind::KeyDown);
                EventOutcome::Consumed
            }
            GestureStart::Pan => {
                if !self.observer.on_pan_start(&event) {
                    self.observer.on_pan_rejected(&event);
                    return EventOutcome::Passthrough;
                }
                trace!(x = point.x, y = point.y, "pan gesture started");
                self.state.begin_pan();
                self.pan_anchor = Some(point);
                self.pan_engaged = false;
                self.listeners.attach(EventKind::PointerMove);
                EventOutcome::Consumed
            }
        }
    }

    fn on_pointer_move(&mut self, point: Point) -> EventOutcome {
        if self.state.panning() {
            return self.on_pan_move(point);
        }

        if self.state.drag_pending() {
            self.state.update_drag(point);
            self.observer.on_redraw_requested(true);
            return EventOutcome::Consumed;
        }

        EventOutcome::Passthrough
    }

    fn on_pan_move(&mut self, point: Point) -> EventOutcome {
        let Some(anchor) = self.pan_anchor else {
            return EventOutcome::Passthrough;
        };
        let mode = self.options.pan.mode.resolve(&self.view);

        if !self.pan_engaged {
            if directional_distance(mode, anchor, point) <= self.options.pan.threshold {
                return EventOutcome::Consumed;
            }
            // Threshold crossed: deltas stream from here on.
            self.pan_engaged = true;
            self.pan_anchor = Some(point);
            return EventOutcome::Consumed;
        }

        let delta = Point::new(point.x - anchor.x, point.y - anchor.y);
        self.pan_anchor = Some(point);
        if apply_pan(&mut self.view, &self.options.limits, delta, mode) {
            self.observer.on_pan(&self.view);
            self.observer.on_redraw_requested(true);
        }
        EventOutcome::Consumed
    }

    fn on_escape(&mut self) -> EventOutcome {
        if !self.state.drag_pending() {
            return EventOutcome::Passthrough;
        }
        debug!("drag gesture cancelled");
        self.state.clear_drag();
        self.state.set_dragging(false);
        self.listeners.detach(EventKind::PointerMove);
        self.listeners.detach(EventKind::KeyDown);
        self.observer.on_redraw_requested(true);
        EventOutcome::Consumed
    }

    fn on_pointer_up(&mut self, point: Point, now_ms: u64) -> EventOutcome {
        if self.state.panning() {
            self.listeners.detach(EventKind::PointerMove);
            self.state.end_pan();
            self.pan_anchor = None;
            if self.pan_engaged {
                self.observer.on_pan_complete();
            }
            self.pan_engaged = false;
            return EventOutcome::Consumed;
        }

        let (Some(kind), Some(start)) = (self.state.drag_mode(), self.state.drag_start()) else {
            return EventOutcome::Passthrough;
        };

        self.listeners.detach(EventKind::PointerMove);
        self.listeners.detach(EventKind::KeyDown);

        let (mode, mirroring) = match kind {
            DragKind::Drag => (self.options.mode.resolve(&self.view), false),
            DragKind::Range => (
                self.options.range.mode.resolve(&self.view),
                self.options.range.mirroring,
            ),
        };

        let distance = directional_distance(mode, start, point);
        if distance <= self.options.drag.threshold {
            trace!(distance, "sub-threshold gesture treated as click");
            self.state.clear_drag();
            self.state.set_dragging(false);
            self.observer.on_redraw_requested(false);
            return EventOutcome::Consumed;
        }

        let rect = compute_drag_rect(&self.view, mode, kind, mirroring, start, point);
        match kind {
            DragKind::Drag => {
                if apply_rect_zoom(&mut self.view, &self.options.limits, rect, mode) {
                    self.observer.on_zoom(&self.view);
                    self.observer.on_zoom_complete();
                }
            }
            DragKind::Range => {
                if let Some(range) = rect.data_range {
                    self.observer.on_range_selected(range);
                }
            }
        }

        debug!(?kind, distance, "drag gesture completed");
        self.state.clear_drag();
        self.click_rearm.arm(now_ms, CLICK_REARM_DELAY_MS);
        self.observer.on_redraw_requested(false);
        EventOutcome::Consumed
    }

    fn on_wheel(
        &mut self,
        event: InputEvent,
        point: Point,
        delta_y: Option<f64>,
        modifiers: Modifiers,
        now_ms: u64,
    ) -> EventOutcome {
        if modifier_blocked(self.options.wheel.modifier_key, modifiers) {
            self.observer.on_zoom_rejected(&event);
            return EventOutcome::Passthrough;
        }

        // The start veto is consulted per wheel event, same contract as a
        // pointer-down start.
        if !self.observer.on_zoom_start(&event) {
            self.observer.on_zoom_rejected(&event);
            return EventOutcome::Passthrough;
        }

        // Some hosts fire duplicate wheel events with no delta; swallow them
        // without claiming the event.
        let Some(delta_y) = delta_y else {
            return EventOutcome::Passthrough;
        };

        let speed = self.options.wheel.speed;
        let factor = if delta_y >= 0.0 {
            1.0 - speed
        } else {
            1.0 + speed
        };

        let mode = self.options.mode.resolve(&self.view);
        if apply_focal_zoom(&mut self.view, &self.options.limits, factor, point, mode) {
            self.wheel_changed = true;
            self.observer.on_zoom(&self.view);
            self.observer.on_redraw_requested(true);
        }
        // Each event in a burst pushes the completion deadline out.
        self.wheel_done.arm(now_ms, WHEEL_COMPLETE_DEBOUNCE_MS);

        EventOutcome::Consumed
    }
}
