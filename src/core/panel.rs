//! Panel toggle controller.
//!
//! Each panel pairs a trigger element with a forward/reverse slide clip and
//! two element sets that swap visibility on every activation. The controller
//! is a two-state machine per panel: `ForwardShown` (initial) and
//! `ReversedShown`, flipping once the cross-fade's show phase has been
//! scheduled. At most one toggle is in flight per panel; activations that
//! arrive while one is pending are dropped.

use std::time::Instant;

use thiserror::Error;

use crate::core::anim::Keyframes;
use crate::core::fade::Fade;
use crate::core::stage::{ElementId, Stage};

/// Extra per-activation side effect a panel may carry. Invoked by the app
/// on every successful activation, uniformly for all panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivateHook {
    /// Rewind the about reel to frame zero and start playback.
    RestartReel,
}

/// Static description of one toggle-able panel.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub name: &'static str,
    /// Element whose activation drives the toggle, and which the slide
    /// clips animate.
    pub trigger: ElementId,
    pub forward_clip: &'static str,
    pub reverse_clip: &'static str,
    pub fade_out: &'static [ElementId],
    pub fade_in: &'static [ElementId],
    pub on_activate: Option<ActivateHook>,
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("trigger element {id:?} not found on the stage")]
    MissingTrigger { id: ElementId },
}

/// Which transition direction runs on the next activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    ForwardShown,
    ReversedShown,
}

impl Direction {
    fn flipped(self) -> Self {
        match self {
            Self::ForwardShown => Self::ReversedShown,
            Self::ReversedShown => Self::ForwardShown,
        }
    }
}

/// A successful activation. The hook, when present, must be run by the
/// caller exactly once.
#[derive(Debug, Clone, Copy)]
pub struct Activated {
    pub hook: Option<ActivateHook>,
}

/// Runtime state of one panel.
#[derive(Debug)]
pub struct PanelToggle {
    config: PanelConfig,
    direction: Direction,
    in_flight: Option<Fade>,
}

impl PanelToggle {
    /// Wire up a panel. Fails when the trigger element is absent so the
    /// caller can skip this panel without affecting the others.
    pub fn setup(config: PanelConfig, stage: &Stage) -> Result<Self, SetupError> {
        if !stage.contains(config.trigger) {
            return Err(SetupError::MissingTrigger { id: config.trigger });
        }
        Ok(Self {
            config,
            direction: Direction::default(),
            in_flight: None,
        })
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// True while a toggle transition is pending.
    pub fn busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Run one toggle activation: restart the direction's slide clip on the
    /// trigger and start the cross-fade. Returns `None` when a previous
    /// toggle is still in flight (the activation is dropped).
    pub fn activate(
        &mut self,
        stage: &mut Stage,
        clips: &Keyframes,
        now: Instant,
    ) -> Option<Activated> {
        if self.in_flight.is_some() {
            tracing::debug!(panel = self.config.name, "toggle in flight, activation dropped");
            return None;
        }

        // Resolve both element sets fresh from the stage on every
        // activation; ids that are not registered drop out silently.
        let fade_out: Vec<ElementId> = self
            .config
            .fade_out
            .iter()
            .copied()
            .filter(|&id| stage.contains(id))
            .collect();
        let fade_in: Vec<ElementId> = self
            .config
            .fade_in
            .iter()
            .copied()
            .filter(|&id| stage.contains(id))
            .collect();

        let clip_name = match self.direction {
            Direction::ForwardShown => self.config.forward_clip,
            Direction::ReversedShown => self.config.reverse_clip,
        };
        // Clear, then apply fresh — the slide restarts from frame zero even
        // when the same clip is already holding its final frame.
        stage.set_playback(self.config.trigger, None);
        stage.set_playback(self.config.trigger, clips.restart(clip_name, now));

        let (hide, show) = match self.direction {
            Direction::ForwardShown => (fade_out, fade_in),
            Direction::ReversedShown => (fade_in, fade_out),
        };
        self.in_flight = Some(Fade::start(stage, &hide, &show, None, now));

        Some(Activated {
            hook: self.config.on_activate,
        })
    }

    /// Advance the pending transition. The direction flips on the tick the
    /// show phase is scheduled; the guard holds until the show fade has
    /// fully run out.
    pub fn tick(&mut self, stage: &mut Stage, now: Instant) {
        let Some(fade) = &mut self.in_flight else {
            return;
        };
        let was_scheduled = fade.show_scheduled();
        fade.tick(stage, now);
        if !was_scheduled && fade.show_scheduled() {
            self.direction = self.direction.flipped();
        }
        if fade.settled(now) {
            self.in_flight = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::anim::Clip;

    const FADE_OUT: &[ElementId] = &["left-a", "left-b"];
    const FADE_IN: &[ElementId] = &["hub-a", "hub-b"];

    fn config() -> PanelConfig {
        PanelConfig {
            name: "projects",
            trigger: "projects-text",
            forward_clip: "move-projects",
            reverse_clip: "move-projects-reverse",
            fade_out: FADE_OUT,
            fade_in: FADE_IN,
            on_activate: None,
        }
    }

    fn world() -> (Stage, Keyframes) {
        let mut stage = Stage::new();
        stage.add_shown("projects-text");
        stage.add_shown("left-a");
        stage.add_shown("left-b");
        stage.add_hidden("hub-a");
        stage.add_hidden("hub-b");

        let mut clips = Keyframes::new();
        clips.register("move-projects", Clip::slide(0, -18));
        clips.register("move-projects-reverse", Clip::slide(-18, 0));
        (stage, clips)
    }

    /// Run ticks until past the fade's settle point.
    fn run_to_settled(panel: &mut PanelToggle, stage: &mut Stage, from: Instant) -> Instant {
        let mut now = from;
        for _ in 0..70 {
            now += Duration::from_millis(50);
            panel.tick(stage, now);
        }
        now
    }

    #[test]
    fn missing_trigger_fails_setup() {
        let (stage, _) = world();
        let mut cfg = config();
        cfg.trigger = "nowhere";
        assert!(matches!(
            PanelToggle::setup(cfg, &stage),
            Err(SetupError::MissingTrigger { id: "nowhere" })
        ));
    }

    #[test]
    fn single_activation_flips_direction() {
        let (mut stage, clips) = world();
        let t0 = Instant::now();
        let mut panel = PanelToggle::setup(config(), &stage).unwrap();
        assert_eq!(panel.direction(), Direction::ForwardShown);

        assert!(panel.activate(&mut stage, &clips, t0).is_some());
        // Hide phase ran on the fade-out set.
        assert!(!stage.get("left-a").unwrap().visible);
        assert!(!stage.get("hub-a").unwrap().visible);

        // Direction flips only once the show phase is scheduled.
        panel.tick(&mut stage, t0 + Duration::from_millis(500));
        assert_eq!(panel.direction(), Direction::ForwardShown);
        panel.tick(&mut stage, t0 + Duration::from_secs(1));
        assert_eq!(panel.direction(), Direction::ReversedShown);
        assert!(stage.get("hub-a").unwrap().visible);
    }

    #[test]
    fn double_toggle_restores_original_visibility() {
        let (mut stage, clips) = world();
        let t0 = Instant::now();
        let mut panel = PanelToggle::setup(config(), &stage).unwrap();

        panel.activate(&mut stage, &clips, t0).unwrap();
        let t1 = run_to_settled(&mut panel, &mut stage, t0);
        assert!(!panel.busy());

        panel.activate(&mut stage, &clips, t1).unwrap();
        run_to_settled(&mut panel, &mut stage, t1);

        assert_eq!(panel.direction(), Direction::ForwardShown);
        assert!(stage.get("left-a").unwrap().visible);
        assert!(!stage.get("hub-a").unwrap().visible);
    }

    #[test]
    fn reentrant_activation_is_dropped() {
        let (mut stage, clips) = world();
        let t0 = Instant::now();
        let mut panel = PanelToggle::setup(config(), &stage).unwrap();

        assert!(panel.activate(&mut stage, &clips, t0).is_some());
        assert!(panel.busy());
        // A second click mid-transition is rejected, state unchanged.
        assert!(panel
            .activate(&mut stage, &clips, t0 + Duration::from_millis(200))
            .is_none());

        run_to_settled(&mut panel, &mut stage, t0);
        assert_eq!(panel.direction(), Direction::ReversedShown);
    }

    #[test]
    fn activation_reports_the_configured_hook() {
        let (mut stage, clips) = world();
        let mut cfg = config();
        cfg.on_activate = Some(ActivateHook::RestartReel);
        let mut panel = PanelToggle::setup(cfg, &stage).unwrap();

        let activated = panel.activate(&mut stage, &clips, Instant::now()).unwrap();
        assert_eq!(activated.hook, Some(ActivateHook::RestartReel));
    }
}
