use crate::{
    deck::model::ViewportBand,
    foundation::{
        core::{Rect, SlideId},
        error::{ScrollfadeError, ScrollfadeResult},
        math::overlap_len,
    },
    layout::geometry::Geometry,
    scroll::{
        band::page_progress,
        signal::{ScrollSnapshot, SlideSignal},
    },
    visual::state::SlideTracking,
};

/// Page dimensions used to place slide sections in the document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageSpec {
    /// Viewport height in pixels.
    pub viewport_height: f64,
    /// Height of the unrelated content above the slideshow.
    pub lead_in: f64,
    /// Height of the unrelated content below the slideshow.
    pub trail: f64,
    /// Content height of each slide section, in display order.
    pub content_heights: Vec<f64>,
}

/// Document-space placement of one slide section and its tracking regions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SlideSection {
    /// Text content of the slide.
    pub content: Rect,
    /// Region straddling the content's top edge.
    pub top_region: Rect,
    /// Region straddling the content's bottom edge.
    pub bottom_region: Rect,
}

/// A laid-out page: the built-in scroll signal source.
///
/// Slide sections are stacked below a lead-in block, separated by the row gap.
/// Each section gets a top region starting one negative margin above its top
/// edge and a bottom region ending one negative margin below its bottom edge,
/// both one region height tall.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageLayout {
    viewport_height: f64,
    document_height: f64,
    band: ViewportBand,
    sections: Vec<SlideSection>,
}

impl PageLayout {
    /// Lay out `spec.content_heights.len()` sections using `geometry`.
    pub fn new(spec: &PageSpec, geometry: &Geometry, band: ViewportBand) -> ScrollfadeResult<Self> {
        if !spec.viewport_height.is_finite() || spec.viewport_height <= 0.0 {
            return Err(ScrollfadeError::precondition(
                "viewport_height must be finite and > 0",
            ));
        }
        for (name, value) in [("lead_in", spec.lead_in), ("trail", spec.trail)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScrollfadeError::precondition(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if spec.content_heights.is_empty() {
            return Err(ScrollfadeError::precondition(
                "page needs at least one slide section",
            ));
        }

        let width = geometry.metric().px();
        let margin = geometry.region_margin();
        let region = geometry.region_height();

        let mut sections = Vec::with_capacity(spec.content_heights.len());
        let mut y = spec.lead_in;
        for (idx, &h) in spec.content_heights.iter().enumerate() {
            if !h.is_finite() || h < 0.0 {
                return Err(ScrollfadeError::precondition(format!(
                    "content height of slide {idx} must be finite and >= 0"
                )));
            }
            if idx > 0 {
                y += geometry.row_gap();
            }
            let content = Rect::new(0.0, y, width, y + h);
            let top_y0 = content.y0 - margin;
            let bottom_y1 = content.y1 + margin;
            sections.push(SlideSection {
                content,
                top_region: Rect::new(0.0, top_y0, width, top_y0 + region),
                bottom_region: Rect::new(0.0, bottom_y1 - region, width, bottom_y1),
            });
            y += h;
        }

        Ok(Self {
            viewport_height: spec.viewport_height,
            document_height: y + spec.trail,
            band,
            sections,
        })
    }

    /// Total document height.
    pub fn document_height(&self) -> f64 {
        self.document_height
    }

    /// Viewport height.
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Largest meaningful scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Placed sections in display order.
    pub fn sections(&self) -> &[SlideSection] {
        &self.sections
    }

    /// Section of `slide`.
    pub fn section(&self, slide: SlideId) -> Option<&SlideSection> {
        self.sections.get(slide)
    }

    /// Sample every signal at document scroll offset `scroll_y`.
    pub fn snapshot(&self, scroll_y: f64) -> ScrollSnapshot {
        let vh = self.viewport_height;
        let viewport = (scroll_y, scroll_y + vh);
        let slides = self
            .sections
            .iter()
            .map(|s| SlideSignal {
                tracking: SlideTracking::new(
                    self.band.region_progress(s.top_region, scroll_y, vh),
                    self.band.region_progress(s.bottom_region, scroll_y, vh),
                ),
                in_view: overlap_len((s.content.y0, s.content.y1), viewport) > 0.0,
            })
            .collect();

        ScrollSnapshot {
            page_progress: page_progress(scroll_y, self.document_height, vh),
            slides,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/page.rs"]
mod tests;
