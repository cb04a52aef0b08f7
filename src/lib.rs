//! Scrollfade drives a scroll-synchronised sticky image slideshow.
//!
//! Text sections scroll in normal flow while a square image panel stays
//! sticky beside them. Every slide's image cross-fades, scales and slides
//! horizontally as a pure function of where the slide's tracking regions sit
//! relative to a fixed viewport band, and exactly one slide is "active" for
//! the secondary animations (title accents, slide counter).
//!
//! # Pipeline overview
//!
//! 1. **Measure**: text column width -> [`LayoutMetric`] via [`LayoutObserver`]
//! 2. **Derive**: `LayoutMetric + SlideshowConfig -> Geometry` (region sizes, offsets, threshold)
//! 3. **Sample**: a [`ScrollSnapshot`] of page and per-slide tracking progress
//!    (supplied by the host, or by [`PageLayout::snapshot`])
//! 4. **Evaluate**: `SlideTracking + Geometry -> VisualState` per slide
//! 5. **Resolve**: opacities -> active slide ([`ActiveSlideResolver`])
//! 6. **Apply**: states and activations are pushed into a [`SlideSink`]
//!
//! [`SlideshowController`] owns the mutable state and runs steps 4-6 once per
//! scroll tick against a single snapshot.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure evaluation**: geometry and visual state are referentially transparent.
//! - **Gated on measurement**: nothing is computed before a layout metric exists.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod deck;
mod foundation;
mod layout;
mod resolve;
mod scroll;
mod session;
mod visual;

pub use deck::dsl::SlideshowBuilder;
pub use deck::model::{Slide, SlideImage, Slideshow, SlideshowConfig, ViewportBand};
pub use foundation::core::{
    Affine, Direction, LayoutMetric, Point, Progress, Rect, SlideId, Vec2, entry_side,
};
pub use foundation::error::{ScrollfadeError, ScrollfadeResult};
pub use layout::geometry::{
    Geometry, GeometryConstants, active_threshold, horizontal_offset_distance,
    tracking_region_height, tracking_region_negative_margin, tracking_region_y_offset,
};
pub use layout::observer::LayoutObserver;
pub use layout::page::{PageLayout, PageSpec, SlideSection};
pub use resolve::active::{ActiveSlideResolver, Resolution};
pub use scroll::band::page_progress;
pub use scroll::direction::DirectionTracker;
pub use scroll::signal::{ScrollSnapshot, SlideSignal};
pub use session::controller::{SlideshowController, TickReport};
pub use session::sink::{InMemorySink, JsonLinesSink, SinkEvent, SlideSink};
pub use visual::accent::{
    AccentFrame, AccentPose, BASE_TIMING, COUNTER_BACKGROUND_INITIAL, COUNTER_TRAVEL,
    CounterBackground, CounterDigit, DigitPose, PALETTE, TITLE_ACCENTS, TITLE_STAGGER, Timing,
    color_for, counter_background, counter_digit, title_accent,
};
pub use visual::state::{MIN_SCALE, SlideTracking, VisualState, scale_for_opacity, visual_state};
