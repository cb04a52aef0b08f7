//! Per-slide visual state as a pure function of tracking progress.
//!
//! Each slide has two tracking regions, one straddling its top edge and one
//! straddling its bottom edge. The top region fades the image in, the bottom
//! region fades it out, and the slide is only fully visible while neither
//! transition is in progress:
//!
//! ```text
//! top     = lerp(top_progress,    [0,1] -> [0,1])   ([1,1] for the first slide)
//! bottom  = lerp(bottom_progress, [0,1] -> [1,0])   ([1,1] for the last slide)
//! opacity = min(top, bottom)
//! scale   = min(1, 0.75 + opacity^2 * 0.25)
//! x       = d * side + opacity * d * -side          (side = -1 even, +1 odd)
//! ```

use crate::{
    foundation::{
        core::{Affine, Progress, SlideId, Vec2, entry_side},
        error::{ScrollfadeError, ScrollfadeResult},
        math::interpolate,
    },
    layout::geometry::Geometry,
};

/// Scale of a fully transparent image.
pub const MIN_SCALE: f64 = 0.75;

/// Tracking progress of a slide's top and bottom regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideTracking {
    /// Progress of the region anchored to the slide's top edge.
    pub top: Progress,
    /// Progress of the region anchored to the slide's bottom edge.
    pub bottom: Progress,
}

impl SlideTracking {
    /// Pair two progress values.
    pub fn new(top: Progress, bottom: Progress) -> Self {
        Self { top, bottom }
    }
}

/// Render-ready appearance of a slide's image.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale in `[MIN_SCALE, 1]`.
    pub scale: f64,
    /// Horizontal translation in pixels.
    pub x: f64,
}

impl VisualState {
    /// Appearance before any scroll sample: transparent, shrunk and pushed
    /// fully to the slide's entry side.
    pub fn resting(id: SlideId, geometry: &Geometry) -> Self {
        Self {
            opacity: 0.0,
            scale: MIN_SCALE,
            x: geometry.offset_distance() * entry_side(id),
        }
    }

    /// Transform for a square panel of side `side`: scale about the panel
    /// centre, then translate horizontally by `x`.
    pub fn to_affine(&self, side: f64) -> Affine {
        let centre = Vec2::new(side / 2.0, side / 2.0);
        Affine::translate(Vec2::new(self.x, 0.0))
            * Affine::translate(centre)
            * Affine::scale(self.scale)
            * Affine::translate(-centre)
    }
}

/// Scale for a given opacity: quadratic ease from [`MIN_SCALE`] to `1`.
pub fn scale_for_opacity(opacity: f64) -> f64 {
    (MIN_SCALE + opacity * opacity * (1.0 - MIN_SCALE)).min(1.0)
}

/// Compute the visual state of slide `id` out of `count`.
///
/// Fails with a precondition error when `count` is zero or `id` is out of range.
pub fn visual_state(
    id: SlideId,
    count: usize,
    tracking: SlideTracking,
    geometry: &Geometry,
) -> ScrollfadeResult<VisualState> {
    if id >= count {
        return Err(ScrollfadeError::precondition(format!(
            "slide id {id} out of range for {count} slides"
        )));
    }

    let top_range = if id == 0 { (1.0, 1.0) } else { (0.0, 1.0) };
    let bottom_range = if id == count - 1 { (1.0, 1.0) } else { (1.0, 0.0) };

    let top = interpolate(tracking.top.get(), (0.0, 1.0), top_range);
    let bottom = interpolate(tracking.bottom.get(), (0.0, 1.0), bottom_range);
    let opacity = top.min(bottom);

    let side = entry_side(id);
    let distance = geometry.offset_distance();

    Ok(VisualState {
        opacity,
        scale: scale_for_opacity(opacity),
        x: distance * side + opacity * distance * -side,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/visual/state.rs"]
mod tests;
