//! Two-phase opacity cross-fade.
//!
//! Hides one element set with a fast fade, waits out a delay gate, then
//! reveals another set with a slow fade on the next tick. The two phases
//! can never overlap: the show side is not touched until the delay has
//! fully elapsed.

use std::time::{Duration, Instant};

use crate::core::stage::{ElementId, Stage};

/// Fast fade applied to the hide set.
const HIDE_DURATION: Duration = Duration::from_millis(300);
/// Slow fade applied to the show set.
const SHOW_DURATION: Duration = Duration::from_secs(2);
/// Gate between the hide and show phases.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// A cross-fade in flight.
///
/// `start` applies the hide phase immediately; `tick` applies the show
/// phase once the delay has elapsed. `show_scheduled` is the completion
/// signal — it turns true the moment the show transitions are applied,
/// not when they visually finish.
#[derive(Debug)]
pub struct Fade {
    to_show: Vec<ElementId>,
    delay: Duration,
    started: Instant,
    show_applied: bool,
}

impl Fade {
    /// Begin the fade: every element of `to_hide` gets a fast transition to
    /// zero opacity and is marked hidden. Empty sets are silent no-ops.
    pub fn start(
        stage: &mut Stage,
        to_hide: &[ElementId],
        to_show: &[ElementId],
        delay: Option<Duration>,
        now: Instant,
    ) -> Self {
        for &id in to_hide {
            stage.begin_transition(id, 0.0, HIDE_DURATION, now);
            stage.set_visible(id, false);
        }
        Self {
            to_show: to_show.to_vec(),
            delay: delay.unwrap_or(DEFAULT_DELAY),
            started: now,
            show_applied: false,
        }
    }

    /// Advance the fade. Call once per tick; the show phase is applied on
    /// the first tick at or after the delay gate.
    pub fn tick(&mut self, stage: &mut Stage, now: Instant) {
        if self.show_applied || now.saturating_duration_since(self.started) < self.delay {
            return;
        }
        for &id in &self.to_show {
            stage.begin_transition(id, 1.0, SHOW_DURATION, now);
            stage.set_visible(id, true);
        }
        self.show_applied = true;
    }

    /// True once the show transitions have been scheduled.
    pub fn show_scheduled(&self) -> bool {
        self.show_applied
    }

    /// True once the show phase has been applied *and* its slow transition
    /// has run its full course.
    pub fn settled(&self, now: Instant) -> bool {
        self.show_applied
            && now.saturating_duration_since(self.started) >= self.delay + SHOW_DURATION
    }
}
