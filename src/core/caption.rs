//! Visibility-driven caption.
//!
//! Each frame the watcher computes how much of every section intersects the
//! page area. When a section crosses into at least half visibility, its
//! category is looked up from its tags and the caption switches to that
//! category's label. Sections with no recognized tag leave the caption
//! untouched.

use crate::core::navigator::PageGeometry;

/// Fraction of a section that must be visible before it drives the caption.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Closed set of section categories, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Fn5,
    Collage,
    Vinyl,
    Cover,
    Shift,
}

impl Category {
    /// Lookup order — the first category whose tag a section carries wins.
    pub const ORDERED: &[Category] = &[
        Category::Fn5,
        Category::Collage,
        Category::Vinyl,
        Category::Cover,
        Category::Shift,
    ];

    /// The tag a section carries to belong to this category.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Fn5 => "fn5",
            Category::Collage => "collage",
            Category::Vinyl => "vinyl",
            Category::Cover => "cover",
            Category::Shift => "shift",
        }
    }

    /// Caption text shown while a section of this category is centered.
    pub fn label(self) -> &'static str {
        match self {
            Category::Fn5 => "BRAND IDENTITY",
            Category::Collage => "COLLAGE ART",
            Category::Vinyl => "VINYL ART",
            Category::Cover => "COVER ART",
            Category::Shift => "EDITORIAL DESIGN",
        }
    }

    /// First matching category for a section's tag set.
    pub fn from_tags(tags: &[&str]) -> Option<Self> {
        Self::ORDERED
            .iter()
            .copied()
            .find(|c| tags.contains(&c.tag()))
    }
}

/// Tracks per-section visibility ratios across frames to detect threshold
/// crossings. Ratios start at zero, so sections already visible on the
/// first pass report immediately.
#[derive(Debug)]
pub struct CaptionWatcher {
    prev_ratios: Vec<f64>,
}

impl CaptionWatcher {
    pub fn new(section_count: usize) -> Self {
        Self {
            prev_ratios: vec![0.0; section_count],
        }
    }

    /// Run one observation pass. Returns the category whose section crossed
    /// into ≥50% visibility this frame, if any; with several crossing at
    /// once the later section in page order wins.
    pub fn observe(&mut self, geo: PageGeometry, section_tags: &[&[&str]]) -> Option<Category> {
        let mut update = None;
        for (index, tags) in section_tags.iter().enumerate() {
            let ratio = intersection_ratio(geo, index);
            let crossed_in = self
                .prev_ratios
                .get(index)
                .is_some_and(|&prev| prev < VISIBILITY_THRESHOLD && ratio >= VISIBILITY_THRESHOLD);
            if let Some(slot) = self.prev_ratios.get_mut(index) {
                *slot = ratio;
            }
            if crossed_in {
                if let Some(category) = Category::from_tags(tags) {
                    update = Some(category);
                }
            }
        }
        update
    }
}

/// Fraction of section `index` currently inside the viewport.
fn intersection_ratio(geo: PageGeometry, index: usize) -> f64 {
    let height = u32::from(geo.viewport_h);
    if height == 0 {
        return 0.0;
    }
    let top = geo.section_top(index);
    let bottom = top + height;
    let view_top = u32::from(geo.offset);
    let view_bottom = geo.scroll_position();

    let overlap = bottom.min(view_bottom).saturating_sub(top.max(view_top));
    f64::from(overlap) / f64::from(height)
}
