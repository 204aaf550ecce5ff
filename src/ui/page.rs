//! The scrolling page — stacked full-viewport sections.
//!
//! Section 0 is the hero: the panel triggers, contact lines, and the two
//! hub element groups, each drawn at the opacity and slide offset the
//! stage reports. Later sections are the portfolio blocks, dimmed until
//! the navigator reveals them.
//!
//! Layout precondition: every section occupies exactly one page-area
//! height, which is what the navigator's paging arithmetic assumes.

use std::time::Instant;

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::content::{
    SectionDef, ABOUT_HUB_ITEMS, ABOUT_HUB_TEXT, ABOUT_TEXT, EMAIL_TEXT, FABIO_TEXT,
    INSTAGRAM_TEXT, PROJECTS_HUB_ITEMS, PROJECTS_HUB_TEXT, PROJECTS_TEXT, SECTIONS,
};
use crate::core::stage::{ElementId, Stage};
use crate::ui::reel::{Reel, ReelWidget};
use crate::ui::theme::Theme;

/// Opacity applied to sections the scroll has not revealed yet.
const UNREVEALED_OPACITY: f64 = 0.25;

const HERO_TITLE: &[&str] = &["F A B I O"];
const PROJECTS_LINES: &[&str] = &["PROJECTS ▸"];
const ABOUT_LINES: &[&str] = &["ABOUT ▸"];
const INSTAGRAM_LINES: &[&str] = &["instagram · @fabio.design"];
const EMAIL_LINES: &[&str] = &["mail · hello@fabio.studio"];
const PROJECTS_HUB_HEADING: &[&str] = &["SELECTED PROJECTS"];
const PROJECTS_HUB_LINES: &[&str] = &[
    "FN5 — brand identity",
    "CUTOUTS — collage series",
    "33 RPM — vinyl art",
    "SLEEVES — cover art",
    "SHIFT — editorial",
];
const ABOUT_HUB_HEADING: &[&str] = &["ABOUT FABIO"];
const ABOUT_HUB_LINES: &[&str] = &[
    "graphic designer, based in köln",
    "print first, pixels second",
    "say hi — commissions open",
];

/// One positioned hero element: where it sits inside the hero section and
/// what it says.
struct HeroItem {
    id: ElementId,
    x: u16,
    row: u16,
    lines: &'static [&'static str],
    style: Style,
}

fn hero_items(w: u16, h: u16) -> Vec<HeroItem> {
    let mid = h / 3;
    let hub_x = w / 2;
    let title_w = HERO_TITLE[0].chars().count() as u16;
    vec![
        HeroItem {
            id: FABIO_TEXT,
            x: w.saturating_sub(title_w) / 2,
            row: 1,
            lines: HERO_TITLE,
            style: Theme::hero_title_style(),
        },
        HeroItem {
            id: PROJECTS_TEXT,
            x: 6,
            row: mid,
            lines: PROJECTS_LINES,
            style: Theme::link_style(),
        },
        HeroItem {
            id: ABOUT_TEXT,
            x: 6,
            row: mid + 2,
            lines: ABOUT_LINES,
            style: Theme::link_style(),
        },
        HeroItem {
            id: INSTAGRAM_TEXT,
            x: 6,
            row: h.saturating_sub(4),
            lines: INSTAGRAM_LINES,
            style: Theme::contact_style(),
        },
        HeroItem {
            id: EMAIL_TEXT,
            x: 6,
            row: h.saturating_sub(3),
            lines: EMAIL_LINES,
            style: Theme::contact_style(),
        },
        HeroItem {
            id: PROJECTS_HUB_TEXT,
            x: hub_x,
            row: mid,
            lines: PROJECTS_HUB_HEADING,
            style: Theme::hub_heading_style(),
        },
        HeroItem {
            id: PROJECTS_HUB_ITEMS,
            x: hub_x,
            row: mid + 2,
            lines: PROJECTS_HUB_LINES,
            style: Theme::hub_items_style(),
        },
        HeroItem {
            id: ABOUT_HUB_TEXT,
            x: hub_x,
            row: mid,
            lines: ABOUT_HUB_HEADING,
            style: Theme::hub_heading_style(),
        },
        HeroItem {
            id: ABOUT_HUB_ITEMS,
            x: hub_x,
            row: mid + 2,
            lines: ABOUT_HUB_LINES,
            style: Theme::hub_items_style(),
        },
    ]
}

/// Absolute hit boxes of the panel triggers, following their slide
/// offsets. Hidden triggers produce no box.
pub fn trigger_hit_boxes(
    page_area: Rect,
    offset: u16,
    stage: &Stage,
    now: Instant,
) -> Vec<(ElementId, Rect)> {
    let top = -i64::from(offset);
    let mut boxes = Vec::new();
    for item in hero_items(page_area.width, page_area.height) {
        if item.id != PROJECTS_TEXT && item.id != ABOUT_TEXT {
            continue;
        }
        if !stage.get(item.id).is_some_and(|el| el.visible) {
            continue;
        }
        let y = top + i64::from(item.row);
        if y < 0 || y >= i64::from(page_area.height) {
            continue;
        }
        let x = i64::from(item.x) + i64::from(stage.slide_offset(item.id, now));
        let x = x.clamp(0, i64::from(page_area.width.saturating_sub(1)));
        let width = item.lines[0].chars().count() as u16;
        boxes.push((
            item.id,
            Rect {
                x: page_area.x + x as u16,
                y: page_area.y + y as u16,
                width: width.min(page_area.width - x as u16),
                height: 1,
            },
        ));
    }
    boxes
}

/// Renders the full page at the given scroll offset.
pub struct PageWidget<'a> {
    pub stage: &'a Stage,
    pub revealed: &'a [bool],
    pub offset: u16,
    pub reel: &'a Reel,
    pub now: Instant,
}

impl Widget for PageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let viewport_h = i64::from(area.height);
        for (index, section) in SECTIONS.iter().enumerate() {
            // Top row of this section relative to the page area.
            let top = index as i64 * viewport_h - i64::from(self.offset);
            if top >= viewport_h || top + viewport_h <= 0 {
                continue;
            }
            if index == 0 {
                self.render_hero(area, buf, top);
            } else {
                self.render_section(area, buf, top, index, section);
            }
        }
    }
}

impl PageWidget<'_> {
    fn render_hero(&self, area: Rect, buf: &mut Buffer, top: i64) {
        for item in hero_items(area.width, area.height) {
            let Some(el) = self.stage.get(item.id) else {
                continue;
            };
            if !el.visible {
                continue;
            }
            let opacity = self.stage.opacity(item.id, self.now);
            let slide = self.stage.slide_offset(item.id, self.now);
            let style = Theme::faded(item.style, opacity);
            for (i, line) in item.lines.iter().enumerate() {
                put_line(
                    buf,
                    area,
                    top,
                    item.row + i as u16,
                    i32::from(item.x) + i32::from(slide),
                    line,
                    style,
                );
            }
        }

        // The reel sits below the about hub lines.
        if self.reel.playing() {
            let mid = area.height / 3;
            let y = top + i64::from(mid) + 2 + ABOUT_HUB_LINES.len() as i64 + 1;
            if y >= 0 && y < i64::from(area.height) {
                let rect = Rect {
                    x: area.x + area.width / 2,
                    y: area.y + y as u16,
                    width: area.width / 2,
                    height: 1,
                };
                ReelWidget { reel: self.reel }.render(rect, buf);
            }
        }
    }

    fn render_section(
        &self,
        area: Rect,
        buf: &mut Buffer,
        top: i64,
        index: usize,
        section: &SectionDef,
    ) {
        let opacity = if self.revealed.get(index).copied().unwrap_or(false) {
            1.0
        } else {
            UNREVEALED_OPACITY
        };
        let title_row = area.height / 3;
        let title_x = centered_x(area.width, section.title);
        put_line(
            buf,
            area,
            top,
            title_row,
            title_x,
            section.title,
            Theme::faded(Theme::section_title_style(), opacity),
        );
        for (i, line) in section.lines.iter().enumerate() {
            put_line(
                buf,
                area,
                top,
                title_row + 2 + i as u16,
                centered_x(area.width, line),
                line,
                Theme::faded(Theme::section_body_style(), opacity),
            );
        }
    }
}

fn centered_x(width: u16, text: &str) -> i32 {
    i32::from(width.saturating_sub(text.chars().count() as u16) / 2)
}

/// Draw one line at a section-relative position, clipping against the page
/// area on both axes.
fn put_line(buf: &mut Buffer, area: Rect, top: i64, row: u16, x: i32, text: &str, style: Style) {
    let y = top + i64::from(row);
    if y < 0 || y >= i64::from(area.height) {
        return;
    }
    let y = area.y + y as u16;

    if x < 0 {
        // Slid past the left edge — drop the off-screen prefix.
        let skip = (-x) as usize;
        let clipped: String = text.chars().skip(skip).collect();
        if clipped.is_empty() {
            return;
        }
        buf.set_stringn(area.x, y, &clipped, usize::from(area.width), style);
        return;
    }

    let x = x as u16;
    if x >= area.width {
        return;
    }
    let max = usize::from(area.width - x);
    buf.set_stringn(area.x + x, y, text, max, style);
}
