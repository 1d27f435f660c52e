//! State of the welcome cover.
//!
//! Two independent timelines share this struct: the typewriter ticks, and the dismissal
//! sequence started by the first click. The dismissal is driven by [`Cover::advance`]
//! with the current time in milliseconds, [`Cover::next_deadline`] tells the caller
//! when to call it next.

use super::{CoverTimings, Ripple, Ripples, Typewriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first click.
    Showing,
    /// Fading out, still in the tree.
    Dismissing { clicked_at: u64 },
    /// Out of the tree, owner not notified yet.
    Hidden { clicked_at: u64 },
    /// Owner notified.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverEvent {
    Hidden,
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cover {
    timings: CoverTimings,
    typewriter: Typewriter,
    ripples: Ripples,
    phase: Phase,
    mounted: bool,
}

impl Cover {
    pub fn new(welcome_text: &str, timings: CoverTimings) -> Self {
        Self {
            timings,
            typewriter: Typewriter::new(welcome_text),
            ripples: Ripples::new(timings.ripple_millis),
            phase: Phase::Showing,
            mounted: true,
        }
    }

    pub fn timings(&self) -> CoverTimings {
        self.timings
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn restart_reveal(&mut self, welcome_text: &str) -> bool {
        self.typewriter.restart(welcome_text)
    }

    /// One typewriter step. Returns false when there's nothing left to reveal.
    pub fn tick(&mut self) -> bool {
        self.mounted && self.typewriter.tick()
    }

    pub fn revealed(&self) -> &str {
        self.typewriter.revealed()
    }

    #[cfg(test)]
    pub fn reveal_complete(&self) -> bool {
        self.typewriter.is_complete()
    }

    /// Starts the dismissal sequence. Only the first click after mount does anything.
    pub fn click(&mut self, x: f64, y: f64, now: u64) -> bool {
        if !self.mounted || self.phase != Phase::Showing {
            return false;
        }

        tracing::debug!("welcome cover clicked at ({}, {})", x, y);
        self.ripples.spawn(x, y, now);
        self.phase = Phase::Dismissing { clicked_at: now };
        true
    }

    /// Applies every transition due at `now`, in order.
    pub fn advance(&mut self, now: u64) -> Vec<CoverEvent> {
        let mut events = vec![];
        if !self.mounted {
            return events;
        }

        self.ripples.expire(now);

        if let Phase::Dismissing { clicked_at } = self.phase {
            if now >= self.hide_at(clicked_at) {
                self.phase = Phase::Hidden { clicked_at };
                events.push(CoverEvent::Hidden);
            }
        }

        if let Phase::Hidden { clicked_at } = self.phase {
            if now >= self.finish_at(clicked_at) {
                self.phase = Phase::Finished;
                events.push(CoverEvent::Finished);
            }
        }

        events
    }

    /// Earliest time at which [`Self::advance`] has something to do.
    pub fn next_deadline(&self) -> Option<u64> {
        if !self.mounted {
            return None;
        }

        let phase_deadline = match self.phase {
            Phase::Showing | Phase::Finished => None,
            Phase::Dismissing { clicked_at } => Some(self.hide_at(clicked_at)),
            Phase::Hidden { clicked_at } => Some(self.finish_at(clicked_at)),
        };

        [phase_deadline, self.ripples.next_expiry()]
            .into_iter()
            .flatten()
            .min()
    }

    fn hide_at(&self, clicked_at: u64) -> u64 {
        clicked_at.saturating_add(self.timings.hide_delay_millis)
    }

    fn finish_at(&self, clicked_at: u64) -> u64 {
        self.hide_at(clicked_at)
            .saturating_add(self.timings.finish_delay_millis)
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Showing | Phase::Dismissing { .. })
    }

    /// Fading out, clicks pass through.
    pub fn is_dismissing(&self) -> bool {
        matches!(self.phase, Phase::Dismissing { .. })
    }

    pub fn scroll_locked(&self) -> bool {
        self.mounted && self.is_visible()
    }

    pub fn ripples(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }

    /// After this, nothing changes anymore.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}
