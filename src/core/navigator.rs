//! Scroll/wheel section navigation.
//!
//! Three behaviors over one page geometry:
//! - reveal-on-scroll: a debounced pass marking sections shown once the
//!   scroll position has moved far enough past their top — one-way, a
//!   section never un-reveals;
//! - end-of-page loop: when the bottom edge comes within a small band of
//!   the document end, an instant jump back to the top is queued and
//!   applied on the next tick;
//! - wheel paging: one section up or down per qualifying wheel event,
//!   throttled, clamped to the first/last section.
//!
//! Layout precondition: sections are stacked at exact viewport-height
//! intervals. The paging arithmetic divides by the viewport height and
//! will drift from the visual layout if that does not hold.

use std::time::{Duration, Instant};

use crate::core::timing::{Debouncer, Throttle};

/// Quiet period before a reveal pass runs.
pub const REVEAL_DEBOUNCE: Duration = Duration::from_millis(100);
/// Cooldown between wheel paging actions.
pub const WHEEL_COOLDOWN: Duration = Duration::from_millis(600);
/// A section reveals once the scroll position is this many rows past its top.
pub const REVEAL_LEAD_ROWS: u32 = 4;
/// Tolerance band around the document end for the loop-to-top check.
pub const EDGE_TOLERANCE_ROWS: u32 = 1;

/// Snapshot of the page's scroll geometry, in terminal rows.
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    /// Height of the visible page area.
    pub viewport_h: u16,
    pub section_count: usize,
    /// Current scroll offset (top row of the viewport within the page).
    pub offset: u16,
}

impl PageGeometry {
    /// Bottom edge of the viewport within the page.
    pub fn scroll_position(&self) -> u32 {
        u32::from(self.offset) + u32::from(self.viewport_h)
    }

    pub fn document_height(&self) -> u32 {
        self.section_count as u32 * u32::from(self.viewport_h)
    }

    pub fn section_top(&self, index: usize) -> u32 {
        index as u32 * u32::from(self.viewport_h)
    }

    fn at_document_end(&self) -> bool {
        self.scroll_position().abs_diff(self.document_height()) <= EDGE_TOLERANCE_ROWS
    }
}

/// Section navigation state: debounce/throttle windows plus the deferred
/// jump-to-top flag.
#[derive(Debug)]
pub struct Navigator {
    reveal_debounce: Debouncer,
    wheel_throttle: Throttle,
    jump_to_top_queued: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            reveal_debounce: Debouncer::new(REVEAL_DEBOUNCE),
            wheel_throttle: Throttle::new(WHEEL_COOLDOWN),
            jump_to_top_queued: false,
        }
    }

    /// Note scroll activity; the reveal pass runs once it quiets down.
    pub fn on_scroll(&mut self, now: Instant) {
        self.reveal_debounce.poke(now);
    }

    /// Drag events check the end-of-page band directly, with no debounce.
    pub fn on_drag(&mut self, geo: PageGeometry) {
        if geo.at_document_end() {
            self.jump_to_top_queued = true;
        }
    }

    /// Page one section in the wheel direction. Returns the new offset, or
    /// `None` while the cooldown window is closed.
    pub fn on_wheel(&mut self, geo: PageGeometry, delta: i32, now: Instant) -> Option<u16> {
        if geo.section_count == 0 || geo.viewport_h == 0 {
            return None;
        }
        if !self.wheel_throttle.try_acquire(now) {
            return None;
        }

        let current = (f64::from(geo.offset) / f64::from(geo.viewport_h)).round() as i64;
        let step: i64 = if delta > 0 { 1 } else { -1 };
        let next = (current + step).clamp(0, geo.section_count as i64 - 1);
        Some((next as u32 * u32::from(geo.viewport_h)) as u16)
    }

    /// Per-tick advance: run a pending reveal pass and apply any queued
    /// jump to the top. Returns the new offset when a jump fires.
    pub fn tick(&mut self, geo: PageGeometry, revealed: &mut [bool], now: Instant) -> Option<u16> {
        if self.reveal_debounce.ready(now) {
            let scroll_position = geo.scroll_position();
            for (index, shown) in revealed.iter_mut().enumerate() {
                if geo.section_top(index) < scroll_position.saturating_sub(REVEAL_LEAD_ROWS) {
                    *shown = true;
                }
            }
            if geo.at_document_end() {
                self.jump_to_top_queued = true;
            }
        }

        if self.jump_to_top_queued {
            self.jump_to_top_queued = false;
            return Some(0);
        }
        None
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
