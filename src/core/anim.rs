//! Named keyframe clips and their playback.
//!
//! A clip slides an element horizontally between two column offsets over a
//! fixed duration and then holds the final frame ("forwards" fill). Clips
//! are registered once at startup under the names the panel configs refer
//! to; triggering one by an unknown name is a logged no-op.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Duration of every panel clip.
pub const CLIP_DURATION: Duration = Duration::from_secs(1);

/// A horizontal slide between two column offsets.
#[derive(Debug, Clone, Copy)]
pub struct Clip {
    pub from: i16,
    pub to: i16,
    pub duration: Duration,
}

impl Clip {
    pub fn slide(from: i16, to: i16) -> Self {
        Self {
            from,
            to,
            duration: CLIP_DURATION,
        }
    }
}

/// A clip in flight on some element.
#[derive(Debug, Clone, Copy)]
pub struct Playback {
    clip: Clip,
    started: Instant,
}

impl Playback {
    /// Column offset at `now`. Clamps to the final frame once the clip has
    /// run its course — the frame persists until the playback is replaced.
    pub fn offset(&self, now: Instant) -> i16 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.clip.duration {
            return self.clip.to;
        }
        let t = elapsed.as_secs_f64() / self.clip.duration.as_secs_f64();
        let span = f64::from(self.clip.to) - f64::from(self.clip.from);
        (f64::from(self.clip.from) + span * t).round() as i16
    }
}

/// Registry of clips by name.
#[derive(Debug, Default)]
pub struct Keyframes {
    clips: HashMap<&'static str, Clip>,
}

impl Keyframes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &'static str, clip: Clip) {
        self.clips.insert(name, clip);
    }

    /// Start the named clip from frame zero. Returns the fresh playback,
    /// which replaces whatever was previously running on the element —
    /// re-triggering the same name restarts it, it is never a no-op.
    pub fn restart(&self, name: &str, now: Instant) -> Option<Playback> {
        match self.clips.get(name) {
            Some(&clip) => Some(Playback {
                clip,
                started: now,
            }),
            None => {
                tracing::warn!("keyframe clip {name:?} is not registered");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyframes() -> Keyframes {
        let mut k = Keyframes::new();
        k.register("slide-left", Clip::slide(0, -20));
        k
    }

    #[test]
    fn playback_interpolates_and_holds_final_frame() {
        let t0 = Instant::now();
        let k = keyframes();
        let p = k.restart("slide-left", t0).unwrap();

        assert_eq!(p.offset(t0), 0);
        assert_eq!(p.offset(t0 + Duration::from_millis(500)), -10);
        assert_eq!(p.offset(t0 + Duration::from_secs(1)), -20);
        // Forwards fill: stays at the final frame.
        assert_eq!(p.offset(t0 + Duration::from_secs(5)), -20);
    }

    #[test]
    fn restart_begins_from_frame_zero() {
        let t0 = Instant::now();
        let k = keyframes();
        let first = k.restart("slide-left", t0).unwrap();
        assert_eq!(first.offset(t0 + Duration::from_secs(2)), -20);

        // Triggering the same clip again rewinds to the start.
        let second = k.restart("slide-left", t0 + Duration::from_secs(2)).unwrap();
        assert_eq!(second.offset(t0 + Duration::from_secs(2)), 0);
    }

    #[test]
    fn unknown_clip_is_a_no_op() {
        let k = keyframes();
        assert!(k.restart("no-such-clip", Instant::now()).is_none());
    }
}
