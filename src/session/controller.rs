use crate::{
    deck::model::Slideshow,
    foundation::{
        core::{Direction, Progress, SlideId},
        error::{ScrollfadeError, ScrollfadeResult},
    },
    layout::{geometry::Geometry, observer::LayoutObserver},
    resolve::active::{ActiveSlideResolver, Resolution},
    scroll::{direction::DirectionTracker, signal::ScrollSnapshot},
    session::sink::SlideSink,
    visual::{
        accent::AccentFrame,
        state::{VisualState, visual_state},
    },
};

/// Summary of one scroll tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TickReport {
    /// Whole-page progress of the sample.
    pub page_progress: Progress,
    /// Scroll direction after the sample.
    pub direction: Direction,
    /// Active slide after the tick.
    pub active: Option<SlideId>,
    /// Set when the active slide changed during the tick.
    pub switched: Option<SlideId>,
    /// Slides strictly above the active threshold.
    pub above_threshold: Vec<SlideId>,
    /// Visual state of every slide; empty while no layout metric is available.
    pub states: Vec<VisualState>,
}

/// Owns all mutable slideshow state and drives a [`SlideSink`].
///
/// Two event sources feed it: resize measurements ([`Self::on_resize`]) and
/// scroll samples ([`Self::on_load`], [`Self::on_scroll`]). Nothing is computed
/// until a layout metric has been measured.
#[derive(Debug)]
pub struct SlideshowController {
    show: Slideshow,
    layout: LayoutObserver,
    geometry: Option<Geometry>,
    direction: DirectionTracker,
    resolver: ActiveSlideResolver,
    states: Vec<VisualState>,
}

impl SlideshowController {
    /// Validate `show` and create a controller with nothing measured or active.
    pub fn new(show: Slideshow) -> ScrollfadeResult<Self> {
        show.validate()?;
        let count = show.len();
        Ok(Self {
            show,
            layout: LayoutObserver::new(),
            geometry: None,
            direction: DirectionTracker::new(),
            resolver: ActiveSlideResolver::new(count),
            states: Vec::new(),
        })
    }

    /// The slideshow being driven.
    pub fn slideshow(&self) -> &Slideshow {
        &self.show
    }

    /// Geometry for the current layout metric.
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Currently active slide.
    pub fn active(&self) -> Option<SlideId> {
        self.resolver.active()
    }

    /// Current scroll direction.
    pub fn direction(&self) -> Direction {
        self.direction.direction()
    }

    /// Last visual state computed for each slide; empty before the first measurement.
    pub fn states(&self) -> &[VisualState] {
        &self.states
    }

    /// Whether a layout metric has ever been measured.
    pub fn is_ready(&self) -> bool {
        self.layout.is_ready()
    }

    /// Feed a text column width measurement. Returns the new geometry when it changed.
    ///
    /// The first measurement seeds every slide with its resting state. Later
    /// measurements only swap geometry; cached states refresh on the next tick.
    #[tracing::instrument(skip(self))]
    pub fn on_resize(&mut self, width: Option<f64>) -> Option<Geometry> {
        let published = self.layout.observe(width)?;
        self.geometry = published.map(|m| Geometry::new(m, &self.show.config));
        if let Some(geometry) = &self.geometry
            && self.states.is_empty()
        {
            self.states = (0..self.show.len())
                .map(|id| VisualState::resting(id, geometry))
                .collect();
        }
        tracing::debug!(metric = ?published, "layout metric changed");
        self.geometry
    }

    /// Stop accepting measurements.
    pub fn disconnect(&mut self) {
        self.layout.disconnect();
    }

    /// Page-load activation: while nothing is active, pick a slide in view
    /// whose opacity has reached the threshold and apply its transform
    /// immediately.
    ///
    /// When several in-view slides qualify the last one in slide order wins.
    #[tracing::instrument(skip(self, snapshot, sink))]
    pub fn on_load(
        &mut self,
        snapshot: &ScrollSnapshot,
        sink: &mut dyn SlideSink,
    ) -> ScrollfadeResult<Option<SlideId>> {
        let Some(geometry) = self.geometry else {
            tracing::trace!("no layout metric; load skipped");
            return Ok(None);
        };
        if self.resolver.active().is_some() {
            return Ok(None);
        }
        self.check_snapshot(snapshot)?;

        let threshold = geometry.active_threshold();
        let count = self.show.len();
        let mut chosen = None;
        for (id, signal) in snapshot.slides.iter().enumerate() {
            if !signal.in_view {
                continue;
            }
            let state = visual_state(id, count, signal.tracking, &geometry)?;
            if let Some(slide) = self
                .resolver
                .observe(id, state.opacity, true, threshold)
                .activated()
            {
                chosen = Some((slide, state));
            }
        }

        let Some((slide, state)) = chosen else {
            return Ok(None);
        };
        self.states[slide] = state;
        sink.apply_visual(slide, &state)?;
        sink.activate(&AccentFrame::for_active(slide, self.direction()))?;
        tracing::debug!(slide, opacity = state.opacity, "initial slide activated");
        Ok(Some(slide))
    }

    /// Process one scroll sample: update direction, recompute every slide
    /// against the same snapshot, resolve the active slide and apply all
    /// states to `sink`.
    #[tracing::instrument(skip(self, snapshot, sink), fields(progress = snapshot.page_progress.get()))]
    pub fn on_scroll(
        &mut self,
        snapshot: &ScrollSnapshot,
        sink: &mut dyn SlideSink,
    ) -> ScrollfadeResult<TickReport> {
        self.direction.observe(snapshot.page_progress.get());
        let direction = self.direction();

        let Some(geometry) = self.geometry else {
            tracing::trace!("no layout metric; tick skipped");
            return Ok(TickReport {
                page_progress: snapshot.page_progress,
                direction,
                active: self.resolver.active(),
                switched: None,
                above_threshold: Vec::new(),
                states: Vec::new(),
            });
        };
        self.check_snapshot(snapshot)?;

        let threshold = geometry.active_threshold();
        let count = self.show.len();
        let before = self.resolver.active();
        for (id, signal) in snapshot.slides.iter().enumerate() {
            let state = visual_state(id, count, signal.tracking, &geometry)?;
            self.states[id] = state;
            if let Resolution::Switched { from, to } =
                self.resolver
                    .observe(id, state.opacity, signal.in_view, threshold)
            {
                tracing::trace!(from, to, "active slide overtaken");
            }
            sink.apply_visual(id, &state)?;
        }

        let active = self.resolver.active();
        let switched = active.filter(|_| active != before);
        if let Some(slide) = switched {
            sink.activate(&AccentFrame::for_active(slide, direction))?;
            tracing::debug!(slide, ?before, ?direction, "active slide changed");
        }

        let above_threshold = self.resolver.slides_above(threshold);
        if above_threshold.len() > 1 {
            tracing::warn!(
                slides = ?above_threshold,
                winner = ?active,
                threshold,
                "more than one slide above active threshold; last update wins"
            );
        }

        let report = TickReport {
            page_progress: snapshot.page_progress,
            direction,
            active,
            switched,
            above_threshold,
            states: self.states.clone(),
        };
        sink.end_tick(&report)?;
        Ok(report)
    }

    fn check_snapshot(&self, snapshot: &ScrollSnapshot) -> ScrollfadeResult<()> {
        if snapshot.slides.len() != self.show.len() {
            return Err(ScrollfadeError::precondition(format!(
                "scroll snapshot has {} slides, slideshow has {}",
                snapshot.slides.len(),
                self.show.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/controller.rs"]
mod tests;
