//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::time::Instant;

use ratatui::layout::Rect;

use crate::content::{self, SECTIONS};
use crate::core::anim::Keyframes;
use crate::core::caption::CaptionWatcher;
use crate::core::navigator::{Navigator, PageGeometry};
use crate::core::panel::{ActivateHook, PanelToggle};
use crate::core::stage::{ElementId, Stage};
use crate::ui::reel::Reel;

/// Caption shown until the first tagged section drives an update.
const INITIAL_CAPTION: &str = "SELECTED WORK";

/// Top-level application state.
pub struct AppState {
    /// All named visual elements (opacity, visibility, slide playback).
    pub stage: Stage,
    /// Registered slide clips the panels trigger by name.
    pub clips: Keyframes,
    /// The toggle panels that survived setup.
    pub panels: Vec<PanelToggle>,
    /// Scroll/wheel section navigation.
    pub navigator: Navigator,
    /// Threshold-crossing watcher driving the caption.
    pub caption_watcher: CaptionWatcher,
    /// The about reel (paused until the first about activation).
    pub reel: Reel,
    /// Current scroll offset of the page, in rows.
    pub offset: u16,
    /// Per-section reveal flags — one-way, never cleared.
    pub revealed: Vec<bool>,
    /// Current caption text.
    pub caption: &'static str,
    /// Page area of the last draw; geometry for hit tests and paging.
    pub page_area: Rect,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        let stage = content::build_stage();
        let mut clips = Keyframes::new();
        content::register_clips(&mut clips);

        // Panels whose trigger is missing are skipped with a warning; the
        // others keep working.
        let mut panels = Vec::new();
        for config in content::panel_configs() {
            let name = config.name;
            match PanelToggle::setup(config, &stage) {
                Ok(panel) => panels.push(panel),
                Err(err) => tracing::warn!("panel {name:?} skipped: {err}"),
            }
        }

        Self {
            stage,
            clips,
            panels,
            navigator: Navigator::new(),
            caption_watcher: CaptionWatcher::new(SECTIONS.len()),
            reel: Reel::new(),
            offset: 0,
            revealed: vec![false; SECTIONS.len()],
            caption: INITIAL_CAPTION,
            page_area: Rect::default(),
            should_quit: false,
            status_message: None,
        }
    }

    pub fn geometry(&self) -> PageGeometry {
        PageGeometry {
            viewport_h: self.page_area.height,
            section_count: SECTIONS.len(),
            offset: self.offset,
        }
    }

    /// Move the page to a new offset. Any movement counts as scroll
    /// activity for the debounced reveal pass.
    pub fn set_offset(&mut self, offset: u16, now: Instant) {
        if offset != self.offset {
            self.offset = offset;
        }
        self.navigator.on_scroll(now);
    }

    /// Activate the panel owned by `trigger`, running its side-effect hook
    /// on success. Re-entrant activations are dropped by the panel itself.
    pub fn activate_panel(&mut self, trigger: ElementId, now: Instant) {
        let Some(panel) = self
            .panels
            .iter_mut()
            .find(|p| p.config().trigger == trigger)
        else {
            return;
        };
        if let Some(activated) = panel.activate(&mut self.stage, &self.clips, now) {
            self.status_message = None;
            match activated.hook {
                Some(ActivateHook::RestartReel) => self.reel.restart(),
                None => {}
            }
        } else {
            // Dropped by the in-flight guard — surface it in the status bar.
            self.status_message = Some(format!("{} toggle still running", panel.config().name));
        }
    }

    /// Per-tick advance: panel fades, settled transitions, the reel, the
    /// deferred navigator jump, and the caption observation pass.
    pub fn advance(&mut self, now: Instant) {
        for panel in &mut self.panels {
            panel.tick(&mut self.stage, now);
        }
        self.stage.settle(now);
        self.reel.tick();

        let geo = self.geometry();
        if let Some(new_offset) = self.navigator.tick(geo, &mut self.revealed, now) {
            self.set_offset(new_offset, now);
        }

        let tags: Vec<&'static [&'static str]> = SECTIONS.iter().map(|s| s.tags).collect();
        if let Some(category) = self.caption_watcher.observe(self.geometry(), &tags) {
            // The caption element is optional; without it the text is
            // simply not updated.
            if self.stage.contains(content::PROJECTS_TITLE) {
                self.caption = category.label();
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
