//! Color theme and glyphs for the Mayajalam TUI.
//!
//! Deep-space neon palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use mayajalam_types::ui::UiOptions;

/// Deep-space neon palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(5, 11, 24); // deep space
    pub const BG_PANEL: Color = Color::Rgb(13, 22, 42); // glass panel
    pub const BG_HIGHLIGHT: Color = Color::Rgb(24, 36, 62);
    pub const BG_BORDER: Color = Color::Rgb(48, 62, 92);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(255, 255, 255);
    pub const TEXT_SECONDARY: Color = Color::Rgb(176, 184, 204); // white/60
    pub const TEXT_MUTED: Color = Color::Rgb(110, 118, 140); // white/40
    pub const TEXT_DISABLED: Color = Color::Rgb(62, 70, 92); // white/20

    // === Neon ===
    pub const NEON_CYAN: Color = Color::Rgb(0, 242, 255);
    pub const NEON_MAGENTA: Color = Color::Rgb(255, 0, 229);

    // === Accent Colors ===
    pub const EMERALD: Color = Color::Rgb(16, 185, 129);
    pub const AMBER: Color = Color::Rgb(251, 191, 36);
    pub const BLUE: Color = Color::Rgb(59, 130, 246);
    pub const PURPLE: Color = Color::Rgb(168, 85, 247);
    pub const YELLOW: Color = Color::Rgb(234, 179, 8);
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
    pub cyan: Color,
    pub magenta: Color,
    pub success: Color,
    pub amber: Color,
    pub blue: Color,
    pub purple: Color,
    pub yellow: Color,
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
            cyan: colors::NEON_CYAN,
            magenta: colors::NEON_MAGENTA,
            success: colors::EMERALD,
            amber: colors::AMBER,
            blue: colors::BLUE,
            purple: colors::PURPLE,
            yellow: colors::YELLOW,
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
            cyan: Color::Cyan,
            magenta: Color::Magenta,
            success: Color::Green,
            amber: Color::Yellow,
            blue: Color::Blue,
            purple: Color::Magenta,
            yellow: Color::Yellow,
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

/// ASCII/Unicode glyphs for icons and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub check: &'static str,
    pub pending: &'static str,
    pub bullet: &'static str,
    pub dot_on: &'static str,
    pub dot_off: &'static str,
    pub upload: &'static str,
    pub file: &'static str,
    pub play: &'static str,
    pub pause: &'static str,
    pub hotspot: &'static str,
    pub avatar: &'static str,
    pub hand: &'static str,
    pub sparkle: &'static str,
    pub eye: &'static str,
    pub ear: &'static str,
    pub arrow_right: &'static str,
    pub bar: &'static str,
    pub spinner_frames: &'static [&'static str],
    pub wave_frames: &'static [&'static str],
    pub orbit_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];
const WAVE_FRAMES: &[&str] = &["▁", "▂", "▃", "▄", "▅", "▆", "▇", "▆", "▅", "▄", "▃", "▂"];
const WAVE_FRAMES_ASCII: &[&str] = &[".", "-", "=", "#", "=", "-"];
const ORBIT_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
const ORBIT_FRAMES_ASCII: &[&str] = &["<", "^", ">", "v"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            check: "OK",
            pending: "o",
            bullet: "*",
            dot_on: "(*)",
            dot_off: "( )",
            upload: "^",
            file: "#",
            play: ">",
            pause: "||",
            hotspot: "(o)",
            avatar: "[:)]",
            hand: "~",
            sparkle: "*",
            eye: "@",
            ear: ")",
            arrow_right: "->",
            bar: "#",
            spinner_frames: SPINNER_FRAMES_ASCII,
            wave_frames: WAVE_FRAMES_ASCII,
            orbit_frames: ORBIT_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            check: "✓",
            pending: "○",
            bullet: "•",
            dot_on: "●",
            dot_off: "○",
            upload: "⇪",
            file: "▤",
            play: "▶",
            pause: "⏸",
            hotspot: "◉",
            avatar: "☺",
            hand: "✋",
            sparkle: "✦",
            eye: "◎",
            ear: "◖",
            arrow_right: "→",
            bar: "█",
            spinner_frames: SPINNER_FRAMES,
            wave_frames: WAVE_FRAMES,
            orbit_frames: ORBIT_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    cycle_frame(glyphs(options).spinner_frames, tick, options)
}

/// Picks a frame from `frames`, frozen on the first when motion is reduced.
#[must_use]
pub(crate) fn cycle_frame(
    frames: &'static [&'static str],
    tick: usize,
    options: UiOptions,
) -> &'static str {
    if options.reduced_motion || frames.is_empty() {
        frames.first().copied().unwrap_or("")
    } else {
        frames[tick % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn badge(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.cyan)
            .bg(palette.bg_panel)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.cyan)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.cyan)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn panel_border(palette: &Palette) -> Style {
        Style::default().fg(palette.bg_border)
    }

    #[must_use]
    pub fn mono(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.amber)
            .add_modifier(Modifier::BOLD)
    }
}
