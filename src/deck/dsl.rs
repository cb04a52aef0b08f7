use crate::{
    deck::model::{Slide, SlideImage, Slideshow, SlideshowConfig, ViewportBand},
    foundation::error::ScrollfadeResult,
};

/// Fluent builder for a [`Slideshow`]. Slide ids are assigned in insertion order.
#[derive(Debug, Default)]
pub struct SlideshowBuilder {
    config: SlideshowConfig,
    slides: Vec<Slide>,
}

impl SlideshowBuilder {
    /// Start with the default configuration and no slides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SlideshowConfig) -> Self {
        self.config = config;
        self
    }

    /// Vertical gap between slide sections in pixels.
    pub fn row_gap(mut self, px: f64) -> Self {
        self.config.row_gap_px = px;
        self
    }

    /// Tracking region height and negative margin as fractions of the layout metric.
    pub fn regions(mut self, height_ratio: f64, margin_ratio: f64) -> Self {
        self.config.region_height_ratio = height_ratio;
        self.config.region_margin_ratio = margin_ratio;
        self
    }

    /// Viewport band offsets as fractions of viewport height.
    pub fn band(mut self, start: f64, end: f64) -> Self {
        self.config.band = ViewportBand { start, end };
        self
    }

    /// Append a slide; `alt` defaults to the lowercased title.
    pub fn slide(
        mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        image_source: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let alt = title.to_lowercase();
        self.slides.push(Slide {
            id: self.slides.len(),
            title,
            content: content.into(),
            image: SlideImage {
                source: image_source.into(),
                alt,
            },
        });
        self
    }

    /// Assemble and validate.
    pub fn build(self) -> ScrollfadeResult<Slideshow> {
        let show = Slideshow {
            config: self.config,
            slides: self.slides,
        };
        show.validate()?;
        Ok(show)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/dsl.rs"]
mod tests;
