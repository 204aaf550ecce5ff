//! Rate-limiting primitives for input-driven work.
//!
//! Both take the current time as a parameter instead of reading the clock,
//! so the event loop owns "now" and tests can step time explicitly.

use std::time::{Duration, Instant};

/// Trailing-edge debouncer: fires once `wait` has elapsed since the *last*
/// poke. Poking again before the deadline pushes the deadline out.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the debouncer.
    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// True exactly once per armed period, when the deadline has passed.
    /// Call once per tick.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Boolean-lock throttle: the first acquisition locks for `cooldown`;
/// everything inside the window is dropped. No queueing.
#[derive(Debug, Clone)]
pub struct Throttle {
    cooldown: Duration,
    locked_until: Option<Instant>,
}

impl Throttle {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            locked_until: None,
        }
    }

    /// Returns `true` if the caller may act now, locking the window.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        if let Some(until) = self.locked_until {
            if now < until {
                return false;
            }
        }
        self.locked_until = Some(now + self.cooldown);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debouncer_fires_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(100));

        d.poke(t0);
        assert!(!d.ready(t0 + Duration::from_millis(50)));
        assert!(d.ready(t0 + Duration::from_millis(100)));
        // One-shot until poked again.
        assert!(!d.ready(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn debouncer_repoke_resets_deadline() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(100));

        d.poke(t0);
        d.poke(t0 + Duration::from_millis(80));
        assert!(!d.ready(t0 + Duration::from_millis(120)));
        assert!(d.ready(t0 + Duration::from_millis(180)));
    }

    #[test]
    fn debouncer_idle_is_never_ready() {
        let mut d = Debouncer::new(Duration::from_millis(100));
        assert!(!d.ready(Instant::now()));
    }

    #[test]
    fn throttle_drops_calls_inside_cooldown() {
        let t0 = Instant::now();
        let mut t = Throttle::new(Duration::from_millis(600));

        assert!(t.try_acquire(t0));
        assert!(!t.try_acquire(t0 + Duration::from_millis(100)));
        assert!(!t.try_acquire(t0 + Duration::from_millis(599)));
        assert!(t.try_acquire(t0 + Duration::from_millis(600)));
    }
}
