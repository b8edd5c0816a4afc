//! Theme configuration for the player and CLI
//!
//! Centralizes all color and style definitions.
//! Provides both ratatui styles (for the player surface) and ANSI escape
//! codes (for plain CLI output).

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Palette selectable from the `[player]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Cinema,
    Ocean,
}

/// Colors used by the player surface and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (time label, status line)
    pub text_primary: Color,
    /// Secondary/dimmed text color (key hints)
    pub text_secondary: Color,
    /// Seek progress and thumb
    pub accent: Color,
    /// Unfilled part of the seek track
    pub track: Color,
    /// Media viewport background
    pub viewport: Color,
    /// Viewport background while the scrim is up
    pub scrim: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::cinema()
    }
}

impl Theme {
    /// Dark viewport with a red seek bar.
    pub fn cinema() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Red,
            track: Color::Gray,
            viewport: Color::Black,
            scrim: Color::Indexed(236),
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Terminal-default background, cyan accents.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            track: Color::DarkGray,
            viewport: Color::Reset,
            scrim: Color::Indexed(236),
            error: Color::Red,
            success: Color::Green,
        }
    }

    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Cinema => Self::cinema(),
            ThemeName::Ocean => Self::ocean(),
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Background for the media viewport, dimmed when the scrim is up.
    pub fn viewport_style(&self, scrim: bool) -> Style {
        let bg = if scrim { self.scrim } else { self.viewport };
        Style::default().bg(bg)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

fn paint(color: Color, text: &str) -> String {
    if !color_enabled() {
        return text.to_string();
    }
    format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // Indexed and RGB colors fall back to no color
        _ => "",
    }
}

/// Theme in effect.
pub fn current_theme() -> Theme {
    Theme::default()
}

/// Whether CLI output should carry ANSI colors.
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}
