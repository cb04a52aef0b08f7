//! Active-slide resolution.
//!
//! Exactly one slide is active once any slide has been activated. Activation
//! happens when a slide's opacity reaches the geometric active threshold; there
//! is no deactivation step, a slide stays active until another one crosses.
//!
//! The resolver does not compare against the current active slide's opacity.
//! The tracking geometry guarantees that at most one slide is strictly above
//! threshold while [`crate::Geometry::has_exclusive_activation`] holds. When
//! that guarantee is broken the last update in slide order wins; use
//! [`ActiveSlideResolver::slides_above`] to detect it.

use crate::foundation::core::SlideId;

/// Outcome of feeding one opacity update to the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// The active slide did not change.
    Unchanged,
    /// First activation since start; the slide's transform must be applied
    /// immediately, without animation.
    Initial {
        /// The activated slide.
        slide: SlideId,
    },
    /// The active slide moved.
    Switched {
        /// Previously active slide.
        from: SlideId,
        /// Newly active slide.
        to: SlideId,
    },
}

impl Resolution {
    /// The slide that became active, if any.
    pub fn activated(self) -> Option<SlideId> {
        match self {
            Self::Unchanged => None,
            Self::Initial { slide } => Some(slide),
            Self::Switched { to, .. } => Some(to),
        }
    }
}

/// Reducer holding the active slide and the last opacity seen for each slide.
#[derive(Clone, Debug)]
pub struct ActiveSlideResolver {
    active: Option<SlideId>,
    opacities: Vec<f64>,
}

impl ActiveSlideResolver {
    /// A resolver for `count` slides with nothing active.
    pub fn new(count: usize) -> Self {
        Self {
            active: None,
            opacities: vec![0.0; count],
        }
    }

    /// Currently active slide.
    pub fn active(&self) -> Option<SlideId> {
        self.active
    }

    /// Last opacity recorded for `slide`.
    pub fn opacity(&self, slide: SlideId) -> Option<f64> {
        self.opacities.get(slide).copied()
    }

    /// Feed the latest opacity of `slide`.
    ///
    /// Before any activation only a slide whose content is in view may become
    /// active. Afterwards any slide at or above `threshold` takes over.
    /// Updates for unknown slides are ignored.
    pub fn observe(
        &mut self,
        slide: SlideId,
        opacity: f64,
        in_view: bool,
        threshold: f64,
    ) -> Resolution {
        let Some(slot) = self.opacities.get_mut(slide) else {
            return Resolution::Unchanged;
        };
        *slot = opacity;

        if opacity < threshold || opacity.is_nan() {
            return Resolution::Unchanged;
        }

        match self.active {
            None if in_view => {
                self.active = Some(slide);
                Resolution::Initial { slide }
            }
            None => Resolution::Unchanged,
            Some(current) if current == slide => Resolution::Unchanged,
            Some(current) => {
                self.active = Some(slide);
                Resolution::Switched {
                    from: current,
                    to: slide,
                }
            }
        }
    }

    /// Slides whose last opacity is strictly above `threshold`, in slide order.
    pub fn slides_above(&self, threshold: f64) -> Vec<SlideId> {
        self.opacities
            .iter()
            .enumerate()
            .filter(|(_, o)| **o > threshold)
            .map(|(id, _)| id)
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/active.rs"]
mod tests;
