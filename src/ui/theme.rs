//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── hero ───────────────────────────────────────────────────
    pub fn hero_title_style() -> Style {
        Style::default()
            .fg(Color::Rgb(235, 235, 235))
            .add_modifier(Modifier::BOLD)
    }

    pub fn link_style() -> Style {
        Style::default()
            .fg(Color::Rgb(120, 200, 255))
            .add_modifier(Modifier::BOLD)
    }

    pub fn contact_style() -> Style {
        Style::default().fg(Color::Rgb(150, 150, 150))
    }

    pub fn hub_heading_style() -> Style {
        Style::default()
            .fg(Color::Rgb(255, 200, 120))
            .add_modifier(Modifier::BOLD)
    }

    pub fn hub_items_style() -> Style {
        Style::default().fg(Color::Rgb(210, 210, 210))
    }

    // ── sections ───────────────────────────────────────────────
    pub fn section_title_style() -> Style {
        Style::default()
            .fg(Color::Rgb(235, 235, 235))
            .add_modifier(Modifier::BOLD)
    }

    pub fn section_body_style() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn caption_style() -> Style {
        Style::default()
            .fg(Color::Rgb(120, 255, 180))
            .add_modifier(Modifier::BOLD)
    }

    pub fn date_style() -> Style {
        Style::default().fg(Color::Rgb(140, 140, 140))
    }

    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn reel_style() -> Style {
        Style::default().fg(Color::Rgb(255, 160, 160))
    }

    /// Scale a style's foreground toward black by `opacity` (0.0 → gone,
    /// 1.0 → unchanged). Non-RGB foregrounds are left as-is above half
    /// opacity and blanked below it.
    pub fn faded(style: Style, opacity: f64) -> Style {
        let opacity = opacity.clamp(0.0, 1.0);
        match style.fg {
            Some(Color::Rgb(r, g, b)) => {
                let scale = |c: u8| (f64::from(c) * opacity).round() as u8;
                style.fg(Color::Rgb(scale(r), scale(g), scale(b)))
            }
            _ if opacity < 0.5 => style.fg(Color::Black),
            _ => style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faded_scales_rgb_foregrounds() {
        let style = Style::default().fg(Color::Rgb(200, 100, 50));
        assert_eq!(
            Theme::faded(style, 0.5).fg,
            Some(Color::Rgb(100, 50, 25))
        );
        assert_eq!(Theme::faded(style, 0.0).fg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(Theme::faded(style, 1.0).fg, Some(Color::Rgb(200, 100, 50)));
    }
}
