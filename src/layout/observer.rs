use crate::foundation::core::LayoutMetric;

/// Receives raw width measurements of the text column and publishes the
/// layout metric.
///
/// Zero, negative and non-finite widths publish "no measurement". Once the
/// first real measurement arrives the observer is ready for good, even if a
/// later measurement drops back to none.
#[derive(Clone, Debug, Default)]
pub struct LayoutObserver {
    metric: Option<LayoutMetric>,
    ready: bool,
    disconnected: bool,
}

impl LayoutObserver {
    /// A connected observer with no measurement yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a raw measurement. Returns `Some(published)` when the published
    /// metric changed, `None` when it is unchanged or the observer is
    /// disconnected.
    pub fn observe(&mut self, width: Option<f64>) -> Option<Option<LayoutMetric>> {
        if self.disconnected {
            tracing::trace!("measurement after disconnect ignored");
            return None;
        }
        let next = width.and_then(|w| LayoutMetric::new(w).ok());
        if next == self.metric {
            return None;
        }
        self.metric = next;
        if next.is_some() {
            self.ready = true;
        }
        Some(next)
    }

    /// Latest published metric.
    pub fn metric(&self) -> Option<LayoutMetric> {
        self.metric
    }

    /// Whether a real measurement has ever been published.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Stop observing. Later measurements are dropped.
    pub fn disconnect(&mut self) {
        self.disconnected = true;
    }

    /// Whether [`LayoutObserver::disconnect`] was called.
    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/observer.rs"]
mod tests;
