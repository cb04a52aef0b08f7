use crate::{foundation::core::Progress, visual::state::SlideTracking};

/// One consistent scroll sample consumed by a single controller tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSnapshot {
    /// Whole-page progress.
    pub page_progress: Progress,
    /// Per-slide signals in display order.
    pub slides: Vec<SlideSignal>,
}

/// Scroll signals for one slide.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideSignal {
    /// Top/bottom tracking region progress.
    pub tracking: SlideTracking,
    /// Whether the slide's content section intersects the viewport.
    pub in_view: bool,
}
