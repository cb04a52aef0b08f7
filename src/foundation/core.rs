use crate::foundation::error::{ScrollfadeError, ScrollfadeResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Position of a slide in display order. Also its identity.
pub type SlideId = usize;

/// A normalized scroll progress value in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    /// Progress at the start of a tracked window.
    pub const ZERO: Self = Self(0.0);
    /// Progress at the end of a tracked window.
    pub const ONE: Self = Self(1.0);

    /// Strict constructor: rejects NaN and values outside `[0, 1]`.
    pub fn new(value: f64) -> ScrollfadeResult<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ScrollfadeError::precondition(format!(
                "progress must be within [0, 1], got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Clamping constructor for values produced by scroll math. NaN maps to 0.
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Raw value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Progress {
    type Error = ScrollfadeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for f64 {
    fn from(value: Progress) -> Self {
        value.0
    }
}

/// Side length in pixels of the square image panel (the measured text column width).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct LayoutMetric(f64);

impl LayoutMetric {
    /// Validate a measured side length: finite and strictly positive.
    pub fn new(px: f64) -> ScrollfadeResult<Self> {
        if !px.is_finite() || px <= 0.0 {
            return Err(ScrollfadeError::precondition(format!(
                "layout metric must be finite and > 0, got {px}"
            )));
        }
        Ok(Self(px))
    }

    /// Raw pixel value.
    pub fn px(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for LayoutMetric {
    type Error = ScrollfadeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LayoutMetric> for f64 {
    fn from(value: LayoutMetric) -> Self {
        value.0
    }
}

/// Scroll direction derived from consecutive whole-page progress samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Scrolling down the page (`+1`).
    #[default]
    Forward,
    /// Scrolling up the page (`-1`).
    Backward,
}

impl Direction {
    /// `+1.0` for [`Direction::Forward`], `-1.0` for [`Direction::Backward`].
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    /// Direction of a non-zero delta; `None` when the delta is zero or NaN.
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::Forward)
        } else if delta < 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }
}

/// Side a slide's image enters from and exits to: `-1.0` (left) for even ids,
/// `+1.0` (right) for odd ids.
pub fn entry_side(id: SlideId) -> f64 {
    if id % 2 == 0 { -1.0 } else { 1.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
