//! The stage — a registry of named visual elements.
//!
//! This is the terminal stand-in for the document: every piece of hero text
//! the panels fade or slide is an entry here, addressed by a stable id.
//! Lookups return `Option` so a missing element is always an explicit case
//! at the call site, never a latent fault.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::core::anim::Playback;

/// Stable identifier of a stage element.
pub type ElementId = &'static str;

/// An opacity transition in flight.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

impl Transition {
    /// Interpolated opacity at `now`, clamped to the endpoint.
    pub fn opacity(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * t
    }

    pub fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Render-relevant state of one element.
#[derive(Debug, Clone, Copy)]
pub struct VisualState {
    /// Opacity the element settles at when no transition is running.
    pub opacity: f64,
    /// Hidden elements take part in layout but are not drawn.
    pub visible: bool,
    pub transition: Option<Transition>,
    /// Keyframe playback sliding the element horizontally.
    pub playback: Option<Playback>,
}

impl VisualState {
    fn shown() -> Self {
        Self {
            opacity: 1.0,
            visible: true,
            transition: None,
            playback: None,
        }
    }

    fn hidden() -> Self {
        Self {
            opacity: 0.0,
            visible: false,
            transition: None,
            playback: None,
        }
    }
}

/// All stage elements, keyed by id.
#[derive(Debug, Default)]
pub struct Stage {
    elements: HashMap<ElementId, VisualState>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element that starts fully visible.
    pub fn add_shown(&mut self, id: ElementId) {
        self.elements.insert(id, VisualState::shown());
    }

    /// Register an element that starts invisible (opacity 0, hidden).
    pub fn add_hidden(&mut self, id: ElementId) {
        self.elements.insert(id, VisualState::hidden());
    }

    pub fn get(&self, id: ElementId) -> Option<&VisualState> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Begin an opacity transition toward `target` over `duration`.
    /// Unknown ids are silent no-ops, like styling an empty selector match.
    pub fn begin_transition(
        &mut self,
        id: ElementId,
        target: f64,
        duration: Duration,
        now: Instant,
    ) {
        let Some(el) = self.elements.get_mut(id) else {
            return;
        };
        let from = match el.transition {
            Some(t) => t.opacity(now),
            None => el.opacity,
        };
        el.transition = Some(Transition {
            from,
            to: target,
            started: now,
            duration,
        });
        el.opacity = target;
    }

    pub fn set_visible(&mut self, id: ElementId, visible: bool) {
        if let Some(el) = self.elements.get_mut(id) {
            el.visible = visible;
        }
    }

    /// Replace (or clear) the element's keyframe playback.
    pub fn set_playback(&mut self, id: ElementId, playback: Option<Playback>) {
        if let Some(el) = self.elements.get_mut(id) {
            el.playback = playback;
        }
    }

    /// Current opacity of an element, interpolating any running transition.
    /// Absent elements read as fully transparent.
    pub fn opacity(&self, id: ElementId, now: Instant) -> f64 {
        match self.elements.get(id) {
            Some(el) => match el.transition {
                Some(t) => t.opacity(now),
                None => el.opacity,
            },
            None => 0.0,
        }
    }

    /// Current horizontal slide offset of an element.
    pub fn slide_offset(&self, id: ElementId, now: Instant) -> i16 {
        self.elements
            .get(id)
            .and_then(|el| el.playback)
            .map_or(0, |p| p.offset(now))
    }

    /// Drop transitions that have reached their endpoint, so settled
    /// elements read their plain `opacity` again.
    pub fn settle(&mut self, now: Instant) {
        for el in self.elements.values_mut() {
            if el.transition.is_some_and(|t| t.finished(now)) {
                el.transition = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_interpolates_toward_target() {
        let t0 = Instant::now();
        let mut stage = Stage::new();
        stage.add_shown("hero");

        stage.begin_transition("hero", 0.0, Duration::from_millis(300), t0);
        assert!((stage.opacity("hero", t0) - 1.0).abs() < 1e-9);
        let mid = stage.opacity("hero", t0 + Duration::from_millis(150));
        assert!((mid - 0.5).abs() < 0.01);
        assert_eq!(stage.opacity("hero", t0 + Duration::from_millis(300)), 0.0);
    }

    #[test]
    fn retargeting_starts_from_current_opacity() {
        let t0 = Instant::now();
        let mut stage = Stage::new();
        stage.add_shown("hero");

        stage.begin_transition("hero", 0.0, Duration::from_millis(300), t0);
        let mid = t0 + Duration::from_millis(150);
        stage.begin_transition("hero", 1.0, Duration::from_secs(2), mid);
        // New transition departs from ~0.5, not from the settled endpoint.
        let v = stage.opacity("hero", mid);
        assert!((v - 0.5).abs() < 0.01);
    }

    #[test]
    fn absent_elements_are_silent_no_ops() {
        let t0 = Instant::now();
        let mut stage = Stage::new();
        stage.begin_transition("ghost", 1.0, Duration::from_secs(1), t0);
        stage.set_visible("ghost", true);
        assert_eq!(stage.opacity("ghost", t0), 0.0);
        assert!(stage.get("ghost").is_none());
    }

    #[test]
    fn settle_clears_finished_transitions() {
        let t0 = Instant::now();
        let mut stage = Stage::new();
        stage.add_hidden("hub");
        stage.begin_transition("hub", 1.0, Duration::from_millis(300), t0);
        assert!(stage.get("hub").unwrap().transition.is_some());

        stage.settle(t0 + Duration::from_millis(400));
        let el = stage.get("hub").unwrap();
        assert!(el.transition.is_none());
        assert_eq!(el.opacity, 1.0);
    }
}
