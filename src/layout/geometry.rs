//! Layout-derived constants for tracking regions, slide offsets and activation.
//!
//! All quantities are pure functions of the measured layout metric `m` (the
//! square image panel's side length) and the fixed row gap between slides:
//!
//! ```text
//! region height       = 0.75 m
//! region neg. margin  = 0.50 m
//! region y offset     = margin - row_gap / 2
//! horizontal offset   = 0.50 m - row_gap
//! active threshold    = y offset / region height
//! ```
//!
//! The threshold is the tracking progress at which the centre of the gap
//! between two slides sits on the viewport band. At that point the exiting and
//! entering slides have equal opacity, so crossing it means the entering slide
//! has become the more visible one.

use crate::{
    deck::model::{SlideshowConfig, ViewportBand},
    foundation::core::LayoutMetric,
};

const DEFAULT_REGION_HEIGHT_RATIO: f64 = 0.75;
const DEFAULT_REGION_MARGIN_RATIO: f64 = 0.5;

/// Height of a slide's top/bottom tracking region.
pub fn tracking_region_height(m: LayoutMetric) -> f64 {
    Geometry::with_row_gap(m, 0.0).region_height()
}

/// Negative margin that pushes a tracking region past its slide edge.
pub fn tracking_region_negative_margin(m: LayoutMetric) -> f64 {
    Geometry::with_row_gap(m, 0.0).region_margin()
}

/// Margin adjusted for the row gap between slide sections.
pub fn tracking_region_y_offset(m: LayoutMetric, row_gap: f64) -> f64 {
    Geometry::with_row_gap(m, row_gap).region_y_offset()
}

/// Distance an image enters from or exits to, horizontally.
pub fn horizontal_offset_distance(m: LayoutMetric, row_gap: f64) -> f64 {
    Geometry::with_row_gap(m, row_gap).offset_distance()
}

/// Opacity level above which a slide is more visible than its neighbour.
pub fn active_threshold(m: LayoutMetric, row_gap: f64) -> f64 {
    Geometry::with_row_gap(m, row_gap).active_threshold()
}

/// Geometry bound to one layout metric and slideshow configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    metric: LayoutMetric,
    row_gap: f64,
    region_height_ratio: f64,
    region_margin_ratio: f64,
}

/// Serializable snapshot of every derived constant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GeometryConstants {
    /// Layout metric in pixels.
    pub metric: f64,
    /// Row gap in pixels.
    pub row_gap: f64,
    /// Tracking region height.
    pub region_height: f64,
    /// Tracking region negative margin.
    pub region_margin: f64,
    /// Tracking region y offset.
    pub region_y_offset: f64,
    /// Horizontal entry/exit distance.
    pub offset_distance: f64,
    /// Active threshold.
    pub active_threshold: f64,
    /// Whether at most one slide can be strictly above threshold for the
    /// band and viewport the constants were evaluated with.
    pub exclusive_activation: bool,
}

impl Geometry {
    /// Bind a metric to a slideshow configuration.
    pub fn new(metric: LayoutMetric, config: &SlideshowConfig) -> Self {
        Self {
            metric,
            row_gap: config.row_gap_px,
            region_height_ratio: config.region_height_ratio,
            region_margin_ratio: config.region_margin_ratio,
        }
    }

    /// Default region ratios with a custom row gap.
    pub fn with_row_gap(metric: LayoutMetric, row_gap: f64) -> Self {
        Self {
            metric,
            row_gap,
            region_height_ratio: DEFAULT_REGION_HEIGHT_RATIO,
            region_margin_ratio: DEFAULT_REGION_MARGIN_RATIO,
        }
    }

    /// The bound layout metric.
    pub fn metric(&self) -> LayoutMetric {
        self.metric
    }

    /// The row gap in pixels.
    pub fn row_gap(&self) -> f64 {
        self.row_gap
    }

    /// See [`tracking_region_height`].
    pub fn region_height(&self) -> f64 {
        self.region_height_ratio * self.metric.px()
    }

    /// See [`tracking_region_negative_margin`].
    pub fn region_margin(&self) -> f64 {
        self.region_margin_ratio * self.metric.px()
    }

    /// See [`tracking_region_y_offset`].
    pub fn region_y_offset(&self) -> f64 {
        self.region_margin() - self.row_gap / 2.0
    }

    /// See [`horizontal_offset_distance`].
    pub fn offset_distance(&self) -> f64 {
        0.5 * self.metric.px() - self.row_gap
    }

    /// See [`active_threshold`].
    pub fn active_threshold(&self) -> f64 {
        self.region_y_offset() / self.region_height()
    }

    /// Top of the sticky image panel relative to the viewport, centring it vertically.
    pub fn sticky_top(&self, viewport_height: f64) -> f64 {
        0.5 * viewport_height - self.metric.px() / 2.0
    }

    /// `true` when at most one slide can be strictly above the active threshold
    /// while tracking against `band` in a viewport `viewport_height` tall.
    ///
    /// Each slide is above threshold over a window of scroll offsets whose
    /// length is its section pitch plus `(1 - 2t) * (start - end) * vh`; the
    /// windows of neighbouring slides stay disjoint only while that extra term
    /// is not positive. A non-positive threshold puts every slide above it.
    pub fn has_exclusive_activation(&self, band: ViewportBand, viewport_height: f64) -> bool {
        let t = self.active_threshold();
        let skew = (band.start - band.end) * viewport_height;
        t > 0.0 && (1.0 - 2.0 * t) * skew <= 0.0
    }

    /// All derived constants at once, with exclusivity evaluated for `band`
    /// and `viewport_height`.
    pub fn constants(&self, band: ViewportBand, viewport_height: f64) -> GeometryConstants {
        GeometryConstants {
            metric: self.metric.px(),
            row_gap: self.row_gap,
            region_height: self.region_height(),
            region_margin: self.region_margin(),
            region_y_offset: self.region_y_offset(),
            offset_distance: self.offset_distance(),
            active_threshold: self.active_threshold(),
            exclusive_activation: self.has_exclusive_activation(band, viewport_height),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
