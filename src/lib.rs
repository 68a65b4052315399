//! chart-zoom: gesture-driven zoom, pan, and range selection for 2D charts.
//!
//! This crate owns the interaction state machine and geometry engine that
//! translate pixel-space pointer, wheel, and drag gestures into data-space
//! range updates on chart axes. Rendering, layout, and data storage stay on
//! the host side; the host feeds raw input events in and paints the overlay
//! frames this crate hands back.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{NoopObserver, ZoomController, ZoomObserver, ZoomOptions};
pub use error::{ZoomError, ZoomResult};
