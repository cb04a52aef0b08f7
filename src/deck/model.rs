use crate::foundation::{
    core::SlideId,
    error::{ScrollfadeError, ScrollfadeResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete slideshow document.
///
/// A slideshow is a pure data model that can be:
/// - built programmatically (see [`crate::SlideshowBuilder`])
/// - serialized/deserialized via Serde (JSON)
///
/// Slides are immutable once the document is built; their count is fixed for
/// the lifetime of a [`crate::SlideshowController`].
pub struct Slideshow {
    /// Layout and tracking configuration.
    #[serde(default)]
    pub config: SlideshowConfig,
    /// Slides in display order; `slides[i].id == i`.
    pub slides: Vec<Slide>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One slide: a text section paired with an image shown in the sticky panel.
pub struct Slide {
    /// Position in display order.
    pub id: SlideId,
    /// Section heading.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Image shown in the sticky panel while this slide is visible.
    pub image: SlideImage,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Opaque image reference handed through to the render sink.
pub struct SlideImage {
    /// Source reference (path or URL), interpreted only by the sink.
    pub source: String,
    /// Alternative text.
    #[serde(default)]
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Layout constants shared by the geometry functions and the scroll source.
pub struct SlideshowConfig {
    /// Vertical spacing between slide content sections in pixels.
    pub row_gap_px: f64,
    /// Tracking region height as a fraction of the layout metric.
    pub region_height_ratio: f64,
    /// Tracking region negative margin as a fraction of the layout metric.
    ///
    /// Must stay below `region_height_ratio` so neighbouring regions overlap.
    pub region_margin_ratio: f64,
    /// Viewport band the tracking regions are measured against.
    pub band: ViewportBand,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            row_gap_px: 24.0,
            region_height_ratio: 0.75,
            region_margin_ratio: 0.5,
            band: ViewportBand::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Offsets, as fractions of viewport height, at which a tracking region's
/// progress starts (region top crosses `start`) and ends (region bottom
/// crosses `end`).
pub struct ViewportBand {
    /// Start offset from the viewport top.
    pub start: f64,
    /// End offset from the viewport top.
    pub end: f64,
}

impl Default for ViewportBand {
    fn default() -> Self {
        Self {
            start: 0.5,
            end: 0.5,
        }
    }
}

impl SlideshowConfig {
    /// Validate authoring-time invariants of the layout constants.
    pub fn validate(&self) -> ScrollfadeResult<()> {
        if !self.row_gap_px.is_finite() || self.row_gap_px < 0.0 {
            return Err(ScrollfadeError::validation(
                "row_gap_px must be finite and >= 0",
            ));
        }
        for (name, value) in [
            ("region_height_ratio", self.region_height_ratio),
            ("region_margin_ratio", self.region_margin_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScrollfadeError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if self.region_margin_ratio >= self.region_height_ratio {
            return Err(ScrollfadeError::validation(
                "region_margin_ratio must be < region_height_ratio so tracking regions overlap",
            ));
        }
        if !self.band.start.is_finite() || !self.band.end.is_finite() {
            return Err(ScrollfadeError::validation(
                "band start/end offsets must be finite",
            ));
        }
        Ok(())
    }
}

impl Slideshow {
    /// Validate the document: configuration, slide count and slide identity.
    pub fn validate(&self) -> ScrollfadeResult<()> {
        self.config.validate()?;
        if self.slides.is_empty() {
            return Err(ScrollfadeError::validation(
                "slideshow must contain at least one slide",
            ));
        }
        for (idx, slide) in self.slides.iter().enumerate() {
            if slide.id != idx {
                return Err(ScrollfadeError::validation(format!(
                    "slide at position {idx} has id {}; ids must match display order",
                    slide.id
                )));
            }
            if slide.title.trim().is_empty() {
                return Err(ScrollfadeError::validation(format!(
                    "slide {idx} title must be non-empty"
                )));
            }
            if slide.image.source.trim().is_empty() {
                return Err(ScrollfadeError::validation(format!(
                    "slide {idx} image.source must be non-empty"
                )));
            }
        }
        Ok(())
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// `true` when the document has no slides (never valid).
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Parse and validate a JSON document.
    pub fn from_json(s: &str) -> ScrollfadeResult<Self> {
        let show: Self = serde_json::from_str(s)?;
        show.validate()?;
        Ok(show)
    }

    /// The five-slide demo deck with default configuration.
    pub fn demo() -> Self {
        const DEMO: [(&str, &str, &str, bool); 5] = [
            ("Flowers", "images/flowers.jpg", "flowers", false),
            ("Bike", "images/bike.jpg", "bike", true),
            ("Coffee", "images/coffee.jpg", "coffee", false),
            ("Ferris Wheel", "images/ferris-wheel.jpg", "ferris wheel", true),
            ("Bridge", "images/bridge.jpg", "bridge", false),
        ];

        let slides = DEMO
            .iter()
            .enumerate()
            .map(|(id, &(title, source, alt, long))| Slide {
                id,
                title: title.to_string(),
                content: if long {
                    format!("{LOREM} {LOREM}")
                } else {
                    LOREM.to_string()
                },
                image: SlideImage {
                    source: source.to_string(),
                    alt: alt.to_string(),
                },
            })
            .collect();

        Self {
            config: SlideshowConfig::default(),
            slides,
        }
    }
}

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in \
reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint \
occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum. \
Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut \
labore et dolore magna aliqua.";

#[cfg(test)]
#[path = "../../tests/unit/deck/model.rs"]
mod tests;
