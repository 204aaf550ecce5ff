//! Static page content — element ids, sections, panel wiring, clips.
//!
//! Everything here is fixed at startup; runtime state lives in `AppState`
//! and the stage.

use crate::core::anim::{Clip, Keyframes};
use crate::core::panel::{ActivateHook, PanelConfig};
use crate::core::stage::{ElementId, Stage};

// ───────────────────────────────────────── hero elements ─────

pub const PROJECTS_TEXT: ElementId = "projects-text";
pub const ABOUT_TEXT: ElementId = "about-text";
pub const FABIO_TEXT: ElementId = "fabio-text";
pub const INSTAGRAM_TEXT: ElementId = "instagram-text";
pub const EMAIL_TEXT: ElementId = "email-text";
pub const PROJECTS_HUB_TEXT: ElementId = "projects-hub-text";
pub const PROJECTS_HUB_ITEMS: ElementId = "projects-hub-items";
pub const ABOUT_HUB_TEXT: ElementId = "about-hub-text";
pub const ABOUT_HUB_ITEMS: ElementId = "about-hub-items";
pub const PROJECTS_TITLE: ElementId = "projects-title";
pub const PROJECTS_DATE: ElementId = "projects-date";

/// Stage with the hero's base elements shown and both hubs hidden.
pub fn build_stage() -> Stage {
    let mut stage = Stage::new();
    for id in [
        PROJECTS_TEXT,
        ABOUT_TEXT,
        FABIO_TEXT,
        INSTAGRAM_TEXT,
        EMAIL_TEXT,
        PROJECTS_TITLE,
        PROJECTS_DATE,
    ] {
        stage.add_shown(id);
    }
    for id in [
        PROJECTS_HUB_TEXT,
        PROJECTS_HUB_ITEMS,
        ABOUT_HUB_TEXT,
        ABOUT_HUB_ITEMS,
    ] {
        stage.add_hidden(id);
    }
    stage
}

// ───────────────────────────────────────── panels ────────────

const PROJECTS_FADE_OUT: &[ElementId] =
    &[FABIO_TEXT, INSTAGRAM_TEXT, EMAIL_TEXT, ABOUT_TEXT];
const PROJECTS_FADE_IN: &[ElementId] = &[PROJECTS_HUB_TEXT, PROJECTS_HUB_ITEMS];
const ABOUT_FADE_OUT: &[ElementId] =
    &[FABIO_TEXT, INSTAGRAM_TEXT, EMAIL_TEXT, PROJECTS_TEXT];
const ABOUT_FADE_IN: &[ElementId] = &[ABOUT_HUB_TEXT, ABOUT_HUB_ITEMS];

/// The two toggle-able panels. The about panel carries the reel-restart
/// hook; projects has no extra side effect.
pub fn panel_configs() -> Vec<PanelConfig> {
    vec![
        PanelConfig {
            name: "projects",
            trigger: PROJECTS_TEXT,
            forward_clip: "move-projects",
            reverse_clip: "move-projects-reverse",
            fade_out: PROJECTS_FADE_OUT,
            fade_in: PROJECTS_FADE_IN,
            on_activate: None,
        },
        PanelConfig {
            name: "about",
            trigger: ABOUT_TEXT,
            forward_clip: "move-about",
            reverse_clip: "move-about-reverse",
            fade_out: ABOUT_FADE_OUT,
            fade_in: ABOUT_FADE_IN,
            on_activate: Some(ActivateHook::RestartReel),
        },
    ]
}

/// Register the four panel slide clips.
pub fn register_clips(clips: &mut Keyframes) {
    clips.register("move-projects", Clip::slide(0, -18));
    clips.register("move-projects-reverse", Clip::slide(-18, 0));
    clips.register("move-about", Clip::slide(0, 18));
    clips.register("move-about-reverse", Clip::slide(18, 0));
}

// ───────────────────────────────────────── sections ──────────

/// One full-viewport content block.
pub struct SectionDef {
    pub title: &'static str,
    /// Class-like markers; the first recognized one picks the caption.
    pub tags: &'static [&'static str],
    pub lines: &'static [&'static str],
}

/// Page sections, top to bottom. The hero carries no category tag, so the
/// caption keeps its previous value while it is centered.
pub const SECTIONS: &[SectionDef] = &[
    SectionDef {
        title: "FABIO",
        tags: &["section", "hero"],
        lines: &[
            "graphic design portfolio",
            "",
            "scroll for selected work",
        ],
    },
    SectionDef {
        title: "FN5",
        tags: &["section", "fn5"],
        lines: &[
            "identity system for the fn5 label",
            "wordmark, sleeve grid, type specimen",
        ],
    },
    SectionDef {
        title: "CUTOUTS",
        tags: &["section", "collage"],
        lines: &[
            "paper collage series",
            "twelve pieces, mixed print media",
        ],
    },
    SectionDef {
        title: "33 RPM",
        tags: &["section", "vinyl"],
        lines: &[
            "center labels and gatefold art",
            "pressed runs for three releases",
        ],
    },
    SectionDef {
        title: "SLEEVES",
        tags: &["section", "cover"],
        lines: &[
            "cover artwork commissions",
            "front/back pairs with spine type",
        ],
    },
    SectionDef {
        title: "SHIFT",
        tags: &["section", "shift"],
        lines: &[
            "editorial design for shift magazine",
            "issue 04 — layout and typography",
        ],
    },
];

/// Byline shown under the caption in the header.
pub const DATE_LINE: &str = "2023 — 2025";

/// Frames of the about reel (the hero's looping clip). Cycles while
/// playing; restarts from the first frame on every about activation.
pub const REEL_FRAMES: &[&str] = &[
    "(•_•)",
    "( •_•)>⌐■-■",
    "(⌐■_■)",
    "(⌐■_■)>",
    "(⌐■_■)",
    "( •_•)>⌐■-■",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::caption::Category;

    #[test]
    fn every_non_hero_section_has_a_category() {
        for section in &SECTIONS[1..] {
            assert!(
                Category::from_tags(section.tags).is_some(),
                "section {:?} has no recognized tag",
                section.title
            );
        }
        assert!(Category::from_tags(SECTIONS[0].tags).is_none());
    }

    #[test]
    fn panel_clips_are_all_registered() {
        let mut clips = Keyframes::new();
        register_clips(&mut clips);
        let t0 = std::time::Instant::now();
        for config in panel_configs() {
            assert!(clips.restart(config.forward_clip, t0).is_some());
            assert!(clips.restart(config.reverse_clip, t0).is_some());
        }
    }

    #[test]
    fn panel_triggers_exist_on_the_stage() {
        let stage = build_stage();
        for config in panel_configs() {
            assert!(stage.contains(config.trigger));
            for &id in config.fade_out.iter().chain(config.fade_in) {
                assert!(stage.contains(id), "unknown element {id:?}");
            }
        }
    }
}
