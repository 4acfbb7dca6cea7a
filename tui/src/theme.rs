//! Color theme and glyphs for the Reveal TUI.
//!
//! Uses the Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use reveal_types::ui::UiOptions;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray
    pub const TEXT_DISABLED: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet

    // === Accent Colors ===
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub peach: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::PRIMARY,
            accent: colors::CYAN,
            success: colors::GREEN,
            warning: colors::YELLOW,
            error: colors::RED,
            peach: colors::ORANGE,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            text_disabled: Color::DarkGray,
            primary: Color::White,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            peach: Color::Yellow,
        }
    }

    /// Foreground for content fading in, `progress` in `[0, 1]`.
    #[must_use]
    pub fn fade(&self, progress: f64) -> Color {
        if progress >= 1.0 {
            self.text_primary
        } else if progress >= 0.5 {
            self.text_secondary
        } else if progress > 0.0 {
            self.text_muted
        } else {
            self.bg_dark
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for page furniture.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub dot_active: &'static str,
    pub dot_inactive: &'static str,
    pub gauge_filled: &'static str,
    pub gauge_empty: &'static str,
    pub prev: &'static str,
    pub next: &'static str,
    pub check: &'static str,
    pub cross: &'static str,
    pub cursor: &'static str,
    pub selected: &'static str,
    pub spinner_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            dot_active: "*",
            dot_inactive: "o",
            gauge_filled: "#",
            gauge_empty: "-",
            prev: "<",
            next: ">",
            check: "OK",
            cross: "X",
            cursor: "_",
            selected: ">",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            dot_active: "●",
            dot_inactive: "○",
            gauge_filled: "█",
            gauge_empty: "░",
            prev: "‹",
            next: "›",
            check: "✓",
            cross: "✗",
            cursor: "▏",
            selected: "▸",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn metric(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border(palette: &Palette) -> Style {
        Style::default().fg(palette.bg_border)
    }

    #[must_use]
    pub fn border_focused(palette: &Palette) -> Style {
        Style::default().fg(palette.primary)
    }

    #[must_use]
    pub fn control(palette: &Palette, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(palette.peach)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_disabled)
        }
    }

    #[must_use]
    pub fn mode_browse(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.text_secondary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn mode_form(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.success)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use reveal_types::ui::UiOptions;

    use super::{Palette, glyphs, palette, spinner_frame};

    #[test]
    fn spinner_frame_cycles_without_reduced_motion() {
        let options = UiOptions::default();
        assert_ne!(spinner_frame(0, options), spinner_frame(1, options));
    }

    #[test]
    fn spinner_frame_static_with_reduced_motion() {
        let options = UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        };
        assert_eq!(spinner_frame(0, options), spinner_frame(1, options));
        assert_eq!(spinner_frame(0, options), spinner_frame(100, options));
    }

    #[test]
    fn ascii_glyphs_are_ascii() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let g = glyphs(options);
        for glyph in [
            g.dot_active,
            g.dot_inactive,
            g.gauge_filled,
            g.gauge_empty,
            g.prev,
            g.next,
            g.check,
            g.cross,
            g.cursor,
        ] {
            assert!(glyph.is_ascii(), "{glyph}");
        }
    }

    #[test]
    fn fade_reaches_primary_text() {
        let p = palette(UiOptions::default());
        assert_eq!(p.fade(0.0), p.bg_dark);
        assert_eq!(p.fade(1.0), p.text_primary);
        let hc = Palette::high_contrast();
        assert_eq!(hc.fade(0.7), hc.text_secondary);
    }
}
