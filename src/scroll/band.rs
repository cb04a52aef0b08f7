use crate::{
    deck::model::ViewportBand,
    foundation::{
        core::{Progress, Rect},
        math::interpolate,
    },
};

impl ViewportBand {
    /// Progress of `region` through this band at document scroll offset `scroll_y`.
    ///
    /// Progress is `0` while the region's top is below `scroll_y + start * vh`
    /// and reaches `1` once its bottom has passed `scroll_y + end * vh`. A
    /// zero-length window steps from 0 to 1 at its start.
    pub fn region_progress(&self, region: Rect, scroll_y: f64, viewport_height: f64) -> Progress {
        let begin = region.y0 - self.start * viewport_height;
        let finish = region.y1 - self.end * viewport_height;
        if finish <= begin {
            return if scroll_y >= begin {
                Progress::ONE
            } else {
                Progress::ZERO
            };
        }
        Progress::saturating(interpolate(scroll_y, (begin, finish), (0.0, 1.0)))
    }
}

/// Whole-page scroll progress. A document that fits the viewport reports `0`.
pub fn page_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> Progress {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return Progress::ZERO;
    }
    Progress::saturating(scroll_y / scrollable)
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/band.rs"]
mod tests;
