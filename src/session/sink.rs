use std::io::Write;

use anyhow::Context as _;

use crate::{
    foundation::{core::SlideId, error::ScrollfadeResult},
    session::controller::TickReport,
    visual::{accent::AccentFrame, state::VisualState},
};

/// Render-sink contract: consumes visual states and activation changes.
///
/// Ordering contract: within one tick every `apply_visual` call precedes the
/// tick's `activate` call (if any), which precedes `end_tick`.
pub trait SlideSink {
    /// Apply `state` to the image of `slide` immediately, without animation.
    fn apply_visual(&mut self, slide: SlideId, state: &VisualState) -> ScrollfadeResult<()>;
    /// A new slide became active; animate secondary elements towards `accents`.
    fn activate(&mut self, accents: &AccentFrame) -> ScrollfadeResult<()>;
    /// Called once after a scroll tick has been fully applied.
    fn end_tick(&mut self, _report: &TickReport) -> ScrollfadeResult<()> {
        Ok(())
    }
}

/// One call received by a sink.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SinkEvent {
    /// [`SlideSink::apply_visual`].
    Visual {
        /// Target slide.
        slide: SlideId,
        /// Applied state.
        state: VisualState,
    },
    /// [`SlideSink::activate`].
    Activate {
        /// Secondary animation targets.
        accents: AccentFrame,
    },
    /// [`SlideSink::end_tick`].
    Tick {
        /// Tick summary.
        report: TickReport,
    },
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    events: Vec<SinkEvent>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the recorded events in call order.
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Drop all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Visual states applied to `slide`, in call order.
    pub fn visuals_for(&self, slide: SlideId) -> Vec<VisualState> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Visual { slide: s, state } if *s == slide => Some(*state),
                _ => None,
            })
            .collect()
    }

    /// Slides activated, in call order.
    pub fn activations(&self) -> Vec<SlideId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Activate { accents } => Some(accents.active),
                _ => None,
            })
            .collect()
    }
}

impl SlideSink for InMemorySink {
    fn apply_visual(&mut self, slide: SlideId, state: &VisualState) -> ScrollfadeResult<()> {
        self.events.push(SinkEvent::Visual {
            slide,
            state: *state,
        });
        Ok(())
    }

    fn activate(&mut self, accents: &AccentFrame) -> ScrollfadeResult<()> {
        self.events.push(SinkEvent::Activate { accents: *accents });
        Ok(())
    }

    fn end_tick(&mut self, report: &TickReport) -> ScrollfadeResult<()> {
        self.events.push(SinkEvent::Tick {
            report: report.clone(),
        });
        Ok(())
    }
}

/// Streams every sink event as one JSON object per line.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
    visuals: bool,
}

impl<W: Write> JsonLinesSink<W> {
    /// Stream all events to `out`.
    pub fn new(out: W) -> Self {
        Self { out, visuals: true }
    }

    /// Skip per-slide visual events; only activations and tick summaries are written.
    pub fn without_visuals(mut self) -> Self {
        self.visuals = false;
        self
    }

    /// Flush and return the writer.
    pub fn into_inner(mut self) -> ScrollfadeResult<W> {
        self.out.flush().context("flush json lines")?;
        Ok(self.out)
    }

    fn write(&mut self, event: &SinkEvent) -> ScrollfadeResult<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n").context("write json line")?;
        Ok(())
    }
}

impl<W: Write> SlideSink for JsonLinesSink<W> {
    fn apply_visual(&mut self, slide: SlideId, state: &VisualState) -> ScrollfadeResult<()> {
        if !self.visuals {
            return Ok(());
        }
        self.write(&SinkEvent::Visual {
            slide,
            state: *state,
        })
    }

    fn activate(&mut self, accents: &AccentFrame) -> ScrollfadeResult<()> {
        self.write(&SinkEvent::Activate { accents: *accents })
    }

    fn end_tick(&mut self, report: &TickReport) -> ScrollfadeResult<()> {
        self.write(&SinkEvent::Tick {
            report: report.clone(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/sink.rs"]
mod tests;
