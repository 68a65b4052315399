use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One endpoint of a per-scale zoom/pan limit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitBound {
    /// Fixed data-space value.
    Value(f64),
    /// Resolves to the bound the scale was created with.
    Original,
    /// No constraint on this side.
    #[default]
    Unbounded,
}

impl LimitBound {
    /// Resolves against the scale's remembered original bound.
    #[must_use]
    pub fn resolve(self, original: f64, unbounded: f64) -> f64 {
        match self {
            Self::Value(value) => value,
            Self::Original => original,
            Self::Unbounded => unbounded,
        }
    }
}

/// Limits consulted (never mutated) by the transform engine for one scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScaleLimits {
    #[serde(default)]
    pub min: LimitBound,
    #[serde(default)]
    pub max: LimitBound,
    /// Smallest visible span a zoom may produce.
    #[serde(default)]
    pub min_range: Option<f64>,
}

/// Mapping from scale identifier to its limits.
pub type ZoomLimits = IndexMap<String, ScaleLimits>;
