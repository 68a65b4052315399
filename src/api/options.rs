use serde::de::Deserializer;
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};

use crate::core::{ChartView, DirectionMode, ZoomLimits};
use crate::error::{ZoomError, ZoomResult};
use crate::interaction::ModifierKey;
use crate::render::Color;

fn default_true() -> bool {
    true
}

fn default_wheel_speed() -> f64 {
    0.1
}

fn default_pan_threshold() -> f64 {
    10.0
}

fn default_label_font_size() -> f64 {
    12.0
}

fn default_label_margin() -> f64 {
    4.0
}

fn default_fill() -> Color {
    Color::rgba(0.88, 0.88, 0.88, 0.3)
}

fn default_border() -> Color {
    Color::rgb(0.88, 0.88, 0.88)
}

fn default_label_color() -> Color {
    Color::rgb(0.2, 0.2, 0.2)
}

fn default_alt_modifier() -> Option<ModifierKey> {
    Some(ModifierKey::Alt)
}

/// Direction mode as either a literal or a function of chart state.
///
/// Computed sources are resolved freshly at gesture start and per redraw,
/// never cached across a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModeSource {
    Literal(DirectionMode),
    Computed(fn(&ChartView) -> DirectionMode),
}

impl ModeSource {
    #[must_use]
    pub fn resolve(self, view: &ChartView) -> DirectionMode {
        match self {
            Self::Literal(mode) => mode,
            Self::Computed(compute) => compute(view),
        }
    }
}

impl Default for ModeSource {
    fn default() -> Self {
        Self::Literal(DirectionMode::Xy)
    }
}

impl Serialize for ModeSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Literal(mode) => mode.serialize(serializer),
            Self::Computed(_) => Err(S::Error::custom(
                "computed mode sources cannot be serialized",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for ModeSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DirectionMode::deserialize(deserializer).map(Self::Literal)
    }
}

/// Draw-cycle phase in which an overlay asks to be painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawPhase {
    BeforeDraw,
    BeforeDatasetsDraw,
    AfterDatasetsDraw,
    AfterDraw,
}

/// Drag-to-pan gesture configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanOptions {
    pub enabled: bool,
    #[serde(default)]
    pub mode: ModeSource,
    /// Reserved knob for axis-area panning handled by the host.
    #[serde(default)]
    pub scale_mode: Option<DirectionMode>,
    #[serde(default)]
    pub modifier_key: Option<ModifierKey>,
    /// Minimum travelled distance in pixels before pan deltas start applying.
    #[serde(default = "default_pan_threshold")]
    pub threshold: f64,
}

impl Default for PanOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: ModeSource::default(),
            scale_mode: None,
            modifier_key: None,
            threshold: default_pan_threshold(),
        }
    }
}

/// Wheel zoom configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelOptions {
    pub enabled: bool,
    /// Fraction by which one wheel tick scales the range.
    #[serde(default = "default_wheel_speed")]
    pub speed: f64,
    #[serde(default)]
    pub modifier_key: Option<ModifierKey>,
}

impl Default for WheelOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            speed: default_wheel_speed(),
            modifier_key: None,
        }
    }
}

/// Drag-rectangle zoom configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragOptions {
    pub enabled: bool,
    /// Gestures travelling at most this many pixels are treated as clicks.
    #[serde(default)]
    pub threshold: f64,
    #[serde(default)]
    pub modifier_key: Option<ModifierKey>,
    #[serde(default = "default_fill")]
    pub background_color: Color,
    #[serde(default = "default_border")]
    pub border_color: Color,
    #[serde(default)]
    pub border_width: f64,
    #[serde(default = "default_drag_draw_phase")]
    pub draw_time: DrawPhase,
}

fn default_drag_draw_phase() -> DrawPhase {
    DrawPhase::BeforeDatasetsDraw
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: 0.0,
            modifier_key: None,
            background_color: default_fill(),
            border_color: default_border(),
            border_width: 0.0,
            draw_time: default_drag_draw_phase(),
        }
    }
}

/// Pinch zoom knob. Touch recognition itself is delegated to a host-side
/// gesture collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PinchOptions {
    pub enabled: bool,
}

/// Styling for the labels a range selection paints outside its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeLabelOptions {
    #[serde(default = "default_label_font_size")]
    pub font_size: f64,
    #[serde(default = "default_label_color")]
    pub font_color: Color,
    /// Gap in pixels between a rectangle edge and its label.
    #[serde(default = "default_label_margin")]
    pub margin: f64,
    /// Optional formatter applied to the rounded data-space bound.
    #[serde(skip)]
    pub formatter: Option<fn(f64) -> String>,
}

impl Default for RangeLabelOptions {
    fn default() -> Self {
        Self {
            font_size: default_label_font_size(),
            font_color: default_label_color(),
            margin: default_label_margin(),
            formatter: None,
        }
    }
}

/// Mirrored range-selection gesture configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeOptions {
    pub enabled: bool,
    #[serde(default)]
    pub mode: ModeSource,
    #[serde(default = "default_true")]
    pub mirroring: bool,
    #[serde(default = "default_alt_modifier")]
    pub modifier_key: Option<ModifierKey>,
    #[serde(default = "default_fill")]
    pub background_color: Color,
    #[serde(default = "default_border")]
    pub border_color: Color,
    #[serde(default)]
    pub border_width: f64,
    #[serde(default = "default_range_draw_phase")]
    pub draw_time: DrawPhase,
    #[serde(default)]
    pub label: RangeLabelOptions,
}

fn default_range_draw_phase() -> DrawPhase {
    DrawPhase::AfterDatasetsDraw
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: ModeSource::default(),
            mirroring: true,
            modifier_key: default_alt_modifier(),
            background_color: default_fill(),
            border_color: default_border(),
            border_width: 0.0,
            draw_time: default_range_draw_phase(),
            label: RangeLabelOptions::default(),
        }
    }
}

/// Full interaction configuration surface, read-only from the gesture
/// engine's perspective.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ZoomOptions {
    /// Direction mode shared by wheel and drag zoom.
    #[serde(default)]
    pub mode: ModeSource,
    /// Reserved knob for axis-area zooming handled by the host.
    #[serde(default)]
    pub scale_mode: Option<DirectionMode>,
    #[serde(default)]
    pub wheel: WheelOptions,
    #[serde(default)]
    pub drag: DragOptions,
    #[serde(default)]
    pub pinch: PinchOptions,
    #[serde(default)]
    pub range: RangeOptions,
    #[serde(default)]
    pub pan: PanOptions,
    #[serde(default)]
    pub limits: ZoomLimits,
}

impl ZoomOptions {
    #[must_use]
    pub fn with_mode(mut self, mode: DirectionMode) -> Self {
        self.mode = ModeSource::Literal(mode);
        self
    }

    #[must_use]
    pub fn with_wheel(mut self, wheel: WheelOptions) -> Self {
        self.wheel = wheel;
        self
    }

    #[must_use]
    pub fn with_drag(mut self, drag: DragOptions) -> Self {
        self.drag = drag;
        self
    }

    #[must_use]
    pub fn with_range(mut self, range: RangeOptions) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub fn with_pan(mut self, pan: PanOptions) -> Self {
        self.pan = pan;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: ZoomLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Serializes options to pretty JSON for debug/config files.
    ///
    /// Fails when [`ZoomOptions::mode`] is [`ModeSource::Computed`], since a
    /// function cannot round-trip through JSON.
    pub fn to_json_pretty(&self) -> ZoomResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ZoomError::InvalidData(format!("failed to serialize options: {e}")))
    }

    /// Deserializes options from JSON.
    pub fn from_json_str(input: &str) -> ZoomResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ZoomError::InvalidData(format!("failed to parse options: {e}")))
    }
}
