#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use chart_zoom::api::{ZoomController, ZoomObserver, ZoomOptions};
use chart_zoom::core::{Axis, ChartArea, ChartView, DataRange, LinearScale, Point};
use chart_zoom::interaction::{InputEvent, Modifiers};

/// Everything the observer hooks saw, shared with the test body.
#[derive(Debug, Default)]
pub struct Record {
    pub zoom_starts: u32,
    pub zooms: u32,
    pub zoom_completes: u32,
    pub zoom_rejections: u32,
    pub pan_starts: u32,
    pub pans: u32,
    pub pan_completes: u32,
    pub pan_rejections: u32,
    pub ranges: Vec<DataRange>,
    pub redraws: Vec<bool>,
    pub veto_zoom_start: bool,
    pub veto_pan_start: bool,
}

pub struct RecordingObserver {
    record: Rc<RefCell<Record>>,
}

impl ZoomObserver for RecordingObserver {
    fn on_zoom_start(&mut self, _event: &InputEvent) -> bool {
        let mut record = self.record.borrow_mut();
        record.zoom_starts += 1;
        !record.veto_zoom_start
    }

    fn on_zoom(&mut self, _view: &ChartView) {
        self.record.borrow_mut().zooms += 1;
    }

    fn on_zoom_complete(&mut self) {
        self.record.borrow_mut().zoom_completes += 1;
    }

    fn on_zoom_rejected(&mut self, _event: &InputEvent) {
        self.record.borrow_mut().zoom_rejections += 1;
    }

    fn on_pan_start(&mut self, _event: &InputEvent) -> bool {
        let mut record = self.record.borrow_mut();
        record.pan_starts += 1;
        !record.veto_pan_start
    }

    fn on_pan(&mut self, _view: &ChartView) {
        self.record.borrow_mut().pans += 1;
    }

    fn on_pan_complete(&mut self) {
        self.record.borrow_mut().pan_completes += 1;
    }

    fn on_pan_rejected(&mut self, _event: &InputEvent) {
        self.record.borrow_mut().pan_rejections += 1;
    }

    fn on_range_selected(&mut self, range: DataRange) {
        self.record.borrow_mut().ranges.push(range);
    }

    fn on_redraw_requested(&mut self, skip_animation: bool) {
        self.record.borrow_mut().redraws.push(skip_animation);
    }
}

pub fn recording_observer() -> (Box<dyn ZoomObserver>, Rc<RefCell<Record>>) {
    let record = Rc::new(RefCell::new(Record::default()));
    let observer = RecordingObserver {
        record: Rc::clone(&record),
    };
    (Box::new(observer), record)
}

/// 400x300 plottable area with identity-ish x/y scales: pixel x maps to
/// value x, pixel y maps through the inverted y axis.
pub fn view_400x300() -> ChartView {
    let mut view = ChartView::new(ChartArea::new(0.0, 0.0, 400.0, 300.0)).expect("valid area");
    view.add_scale(
        "x",
        LinearScale::new(Axis::X, 0.0, 400.0).expect("valid x scale"),
    );
    view.add_scale(
        "y",
        LinearScale::new(Axis::Y, 0.0, 300.0).expect("valid y scale"),
    );
    view
}

pub fn controller_with(
    options: ZoomOptions,
) -> (ZoomController, Rc<RefCell<Record>>) {
    let (observer, record) = recording_observer();
    (
        ZoomController::new(view_400x300(), options, observer),
        record,
    )
}

pub fn down(x: f64, y: f64) -> InputEvent {
    down_with(x, y, Modifiers::NONE)
}

pub fn down_with(x: f64, y: f64, modifiers: Modifiers) -> InputEvent {
    InputEvent::PointerDown {
        point: Point::new(x, y),
        modifiers,
        primary_button: true,
    }
}

pub fn mv(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerMove {
        point: Point::new(x, y),
        modifiers: Modifiers::NONE,
    }
}

pub fn up(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerUp {
        point: Point::new(x, y),
        modifiers: Modifiers::NONE,
    }
}

pub fn wheel(x: f64, y: f64, delta_y: Option<f64>) -> InputEvent {
    wheel_with(x, y, delta_y, Modifiers::NONE)
}

pub fn wheel_with(x: f64, y: f64, delta_y: Option<f64>, modifiers: Modifiers) -> InputEvent {
    InputEvent::Wheel {
        point: Point::new(x, y),
        delta_y,
        modifiers,
    }
}
