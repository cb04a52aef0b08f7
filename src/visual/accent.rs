//! Targets for the secondary animations that follow the active slide: the
//! staggered accent squares behind the title and the slide counter.
//!
//! These are end states only. Interpolating between them over time belongs to
//! the render sink's animation runtime.

use crate::foundation::core::{Direction, SlideId};

/// Slide colours, indexed by slide id modulo the palette length.
pub const PALETTE: [&str; 5] = ["#6282a6", "#7e6e84", "#72665e", "#b87a5e", "#ebbd74"];

/// Vertical travel of the counter digit when swapping.
pub const COUNTER_TRAVEL: f64 = 40.0;

/// Number of accent squares behind an active title.
pub const TITLE_ACCENTS: usize = 3;

/// Timing for a secondary animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Timing {
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Cubic-bezier control points `(x1, y1, x2, y2)`.
    pub ease: [f64; 4],
    /// Delay between staggered children, in seconds.
    pub stagger_secs: f64,
    /// Delay before the first child, in seconds.
    pub delay_secs: f64,
}

const BASE_EASE: [f64; 4] = [0.72, 0.32, 0.0, 1.0];

/// Timing shared by the counter and the individual title accents.
pub const BASE_TIMING: Timing = Timing {
    duration_secs: 0.7,
    ease: BASE_EASE,
    stagger_secs: 0.0,
    delay_secs: 0.0,
};

/// Timing of the container that staggers the title accents.
pub const TITLE_STAGGER: Timing = Timing {
    duration_secs: 1.0,
    ease: BASE_EASE,
    stagger_secs: 0.6,
    delay_secs: 0.1,
};

/// Colour for a slide.
pub fn color_for(id: SlideId) -> &'static str {
    PALETTE[id % PALETTE.len()]
}

/// Pose of one title accent square.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AccentPose {
    /// Opacity.
    pub opacity: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotate_deg: f64,
    /// Horizontal offset in pixels.
    pub x: f64,
    /// Vertical offset in pixels.
    pub y: f64,
}

/// Pose of accent square `n` (1-based) when its title is (in)active.
///
/// Inactive squares are collapsed and thrown out along the scroll direction,
/// further for higher `n`; active squares settle with decreasing opacity.
pub fn title_accent(n: usize, direction: Direction, active: bool) -> AccentPose {
    let n = n as f64;
    if active {
        return AccentPose {
            opacity: 1.0 / (2.0 + n * n),
            scale: 1.0,
            rotate_deg: 0.0,
            x: 0.0,
            y: 0.0,
        };
    }
    let dir = direction.sign();
    let cube = n.powi(3);
    AccentPose {
        opacity: 0.0,
        scale: 0.0,
        rotate_deg: 270.0 * dir,
        x: -25.0 * cube,
        y: 15.0 * cube * dir,
    }
}

/// Counter background colour and opacity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CounterBackground {
    /// CSS hex colour.
    pub color: &'static str,
    /// Opacity.
    pub opacity: f64,
}

/// Background before any slide is active.
pub const COUNTER_BACKGROUND_INITIAL: CounterBackground = CounterBackground {
    color: "#ffffff",
    opacity: 0.0,
};

/// Background while `id` is active.
pub fn counter_background(id: SlideId) -> CounterBackground {
    CounterBackground {
        color: color_for(id),
        opacity: 0.7,
    }
}

/// Pose of the counter digit.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DigitPose {
    /// Opacity.
    pub opacity: f64,
    /// Vertical offset in pixels.
    pub y: f64,
}

/// Enter, rest and exit poses of the digit shown for the active slide.
///
/// The incoming digit arrives from the scroll direction and the outgoing one
/// leaves towards the opposite side, like a rolling counter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CounterDigit {
    /// One-based label.
    pub label: usize,
    /// Pose the digit enters from.
    pub enter: DigitPose,
    /// Resting pose.
    pub rest: DigitPose,
    /// Pose the digit exits to when replaced.
    pub exit: DigitPose,
}

/// Counter digit for the active slide `id`.
pub fn counter_digit(id: SlideId, direction: Direction) -> CounterDigit {
    let dir = direction.sign();
    CounterDigit {
        label: id + 1,
        enter: DigitPose {
            opacity: 0.0,
            y: dir * COUNTER_TRAVEL,
        },
        rest: DigitPose {
            opacity: 0.9,
            y: 0.0,
        },
        exit: DigitPose {
            opacity: 0.0,
            y: -dir * COUNTER_TRAVEL,
        },
    }
}

/// Every secondary animation target for one activation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AccentFrame {
    /// Newly active slide.
    pub active: SlideId,
    /// Scroll direction at activation.
    pub direction: Direction,
    /// Accent colour of the active slide.
    pub color: &'static str,
    /// Target poses of the active title's accents.
    pub title_active: [AccentPose; TITLE_ACCENTS],
    /// Target poses of every other title's accents.
    pub title_inactive: [AccentPose; TITLE_ACCENTS],
    /// Counter background target.
    pub background: CounterBackground,
    /// Counter digit poses.
    pub digit: CounterDigit,
}

impl AccentFrame {
    /// Targets for `id` becoming active while scrolling in `direction`.
    pub fn for_active(id: SlideId, direction: Direction) -> Self {
        Self {
            active: id,
            direction,
            color: color_for(id),
            title_active: std::array::from_fn(|i| title_accent(i + 1, direction, true)),
            title_inactive: std::array::from_fn(|i| title_accent(i + 1, direction, false)),
            background: counter_background(id),
            digit: counter_digit(id, direction),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visual/accent.rs"]
mod tests;
