//! The about reel — a small looping frame sequence shown next to the
//! about hub, the terminal stand-in for the hero video.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::Widget,
};

use crate::content::REEL_FRAMES;
use crate::ui::theme::Theme;

/// Ticks each frame is held for (≈200 ms at a 50 ms tick).
const TICKS_PER_FRAME: u64 = 4;

/// Playback state of the reel. Paused until the about panel is first
/// activated; every activation rewinds to frame zero.
#[derive(Debug, Default)]
pub struct Reel {
    playing: bool,
    ticks: u64,
}

impl Reel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewind to the first frame and start playing.
    pub fn restart(&mut self) {
        self.playing = true;
        self.ticks = 0;
    }

    /// Advance playback by one tick.
    pub fn tick(&mut self) {
        if self.playing {
            self.ticks += 1;
        }
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    /// Current frame, looping over the sequence.
    pub fn frame(&self) -> &'static str {
        let index = (self.ticks / TICKS_PER_FRAME) as usize % REEL_FRAMES.len();
        REEL_FRAMES[index]
    }
}

/// Renders the reel's current frame centered in `area`.
pub struct ReelWidget<'a> {
    pub reel: &'a Reel,
}

impl Widget for ReelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.reel.playing() || area.width == 0 || area.height == 0 {
            return;
        }
        let frame = self.reel.frame();
        let width = frame.chars().count() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height / 2;
        buf.set_stringn(x, y, frame, area.width as usize, Theme::reel_style());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_rewinds_to_frame_zero() {
        let mut reel = Reel::new();
        assert!(!reel.playing());

        reel.restart();
        for _ in 0..TICKS_PER_FRAME {
            reel.tick();
        }
        assert_eq!(reel.frame(), REEL_FRAMES[1]);

        reel.restart();
        assert_eq!(reel.frame(), REEL_FRAMES[0]);
        assert!(reel.playing());
    }

    #[test]
    fn playback_loops_over_the_sequence() {
        let mut reel = Reel::new();
        reel.restart();
        for _ in 0..TICKS_PER_FRAME * REEL_FRAMES.len() as u64 {
            reel.tick();
        }
        assert_eq!(reel.frame(), REEL_FRAMES[0]);
    }

    #[test]
    fn paused_reel_does_not_advance() {
        let mut reel = Reel::new();
        for _ in 0..10 {
            reel.tick();
        }
        assert_eq!(reel.frame(), REEL_FRAMES[0]);
    }
}
