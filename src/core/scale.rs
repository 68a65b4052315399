use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::types::ChartArea;
use crate::error::{ZoomError, ZoomResult};

/// Orientation of a scale relative to the plottable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Linear axis model with a mutable visible range and a remembered original
/// range.
///
/// `original_*` tracks the bounds the scale was created with; zoom and pan
/// mutate only the visible `min`/`max`. Pixel mapping follows screen
/// convention: x grows rightward, y grows downward, so the y axis maps its
/// maximum value to the area's top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    axis: Axis,
    min: f64,
    max: f64,
    original_min: f64,
    original_max: f64,
}

impl LinearScale {
    pub fn new(axis: Axis, min: f64, max: f64) -> ZoomResult<Self> {
        validate_range(min, max)?;
        Ok(Self {
            axis,
            min,
            max,
            original_min: min,
            original_max: max,
        })
    }

    #[must_use]
    pub fn axis(self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn original_range(self) -> (f64, f64) {
        (self.original_min, self.original_max)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Overrides the visible range without touching the remembered original.
    pub fn set_range(&mut self, min: f64, max: f64) -> ZoomResult<()> {
        validate_range(min, max)?;
        self.min = min;
        self.max = max;
        Ok(())
    }

    /// Restores the visible range to the bounds the scale was created with.
    pub fn reset_range(&mut self) {
        self.min = self.original_min;
        self.max = self.original_max;
    }

    #[must_use]
    pub fn is_zoomed_or_panned(self) -> bool {
        self.min != self.original_min || self.max != self.original_max
    }

    /// Maps a pixel coordinate (x or y depending on orientation) to a data
    /// value. Total for any finite pixel; the area is validated at
    /// `ChartView` construction.
    #[must_use]
    pub fn pixel_to_value(self, pixel: f64, area: ChartArea) -> f64 {
        match self.axis {
            Axis::X => {
                let normalized = (pixel - area.left) / area.width();
                self.min + normalized * self.span()
            }
            Axis::Y => {
                let normalized = (area.bottom - pixel) / area.height();
                self.min + normalized * self.span()
            }
        }
    }

    /// Inverse of [`LinearScale::pixel_to_value`].
    #[must_use]
    pub fn value_to_pixel(self, value: f64, area: ChartArea) -> f64 {
        let normalized = (value - self.min) / self.span();
        match self.axis {
            Axis::X => area.left + normalized * area.width(),
            Axis::Y => area.bottom - normalized * area.height(),
        }
    }
}

fn validate_range(min: f64, max: f64) -> ZoomResult<()> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(ZoomError::InvalidData(
            "scale range must be finite and min < max".to_owned(),
        ));
    }
    Ok(())
}

/// Per-chart model the interaction controller operates on: the plottable
/// area plus an ordered registry of named scales.
///
/// Stands in for the host chart at the crate boundary. Registry order is
/// deterministic; the first scale per orientation acts as the primary axis
/// for data-range mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    area: ChartArea,
    scales: IndexMap<String, LinearScale>,
}

impl ChartView {
    pub fn new(area: ChartArea) -> ZoomResult<Self> {
        area.validate()?;
        Ok(Self {
            area,
            scales: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn area(&self) -> ChartArea {
        self.area
    }

    pub fn add_scale(&mut self, id: impl Into<String>, scale: LinearScale) {
        self.scales.insert(id.into(), scale);
    }

    #[must_use]
    pub fn scale(&self, id: &str) -> Option<&LinearScale> {
        self.scales.get(id)
    }

    pub fn scale_mut(&mut self, id: &str) -> Option<&mut LinearScale> {
        self.scales.get_mut(id)
    }

    pub fn require_scale_mut(&mut self, id: &str) -> ZoomResult<&mut LinearScale> {
        self.scales
            .get_mut(id)
            .ok_or_else(|| ZoomError::UnknownScale(id.to_owned()))
    }

    pub fn scales(&self) -> impl Iterator<Item = (&str, &LinearScale)> {
        self.scales.iter().map(|(id, scale)| (id.as_str(), scale))
    }

    pub fn scales_mut(&mut self) -> impl Iterator<Item = (&str, &mut LinearScale)> {
        self.scales
            .iter_mut()
            .map(|(id, scale)| (id.as_str(), scale))
    }

    /// First registered scale with the given orientation, if any.
    #[must_use]
    pub fn primary_scale(&self, axis: Axis) -> Option<&LinearScale> {
        self.scales.values().find(|scale| scale.axis() == axis)
    }

    /// Maps a pixel coordinate through the primary scale of `axis`.
    #[must_use]
    pub fn pixel_to_value(&self, axis: Axis, pixel: f64) -> Option<f64> {
        self.primary_scale(axis)
            .map(|scale| scale.pixel_to_value(pixel, self.area))
    }
}
