use crate::foundation::core::Direction;

/// Tracks scroll direction from consecutive whole-page progress samples.
///
/// The first sample only primes the tracker. Equal consecutive samples leave
/// the direction as it was.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectionTracker {
    last: Option<f64>,
    direction: Direction,
}

impl DirectionTracker {
    /// A tracker facing [`Direction::Forward`] with no samples.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a sample; returns the new direction when a non-zero delta set it.
    pub fn observe(&mut self, progress: f64) -> Option<Direction> {
        if progress.is_nan() {
            return None;
        }
        let prev = self.last.replace(progress)?;
        let next = Direction::from_delta(progress - prev)?;
        self.direction = next;
        Some(next)
    }

    /// Current direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/direction.rs"]
mod tests;
