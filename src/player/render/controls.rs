//! Playback button cluster and the time label row.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

use crate::player::render::layout::{ControlButton, SurfaceLayout};
use crate::theme::Theme;

/// Fullscreen affordance glyph.
pub const FULLSCREEN_GLYPH: &str = "⤢";

/// Label shown on a button.
pub fn button_label(button: ControlButton, playing: bool) -> &'static str {
    match button {
        ControlButton::SkipBackward => "◀◀",
        ControlButton::PlayPause if playing => "❚❚",
        ControlButton::PlayPause => "▶",
        ControlButton::SkipForward => "▶▶",
    }
}

/// Render the three playback buttons, label centered in each.
pub fn render_controls(buf: &mut Buffer, layout: &SurfaceLayout, playing: bool, theme: &Theme) {
    for (button, rect) in ControlButton::ALL.into_iter().zip(layout.buttons) {
        if rect.is_empty() {
            continue;
        }
        let style = match button {
            ControlButton::PlayPause => Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(theme.text_primary).bg(theme.scrim),
        };
        buf.set_style(rect, style);

        let label = button_label(button, playing);
        let label_width = label.chars().count() as u16;
        let x = rect.x + rect.width.saturating_sub(label_width) / 2;
        buf.set_stringn(x, rect.y, label, rect.width as usize, style);
    }
}

/// Render the time label (left) and fullscreen affordance (right).
pub fn render_label_row(
    buf: &mut Buffer,
    layout: &SurfaceLayout,
    time_label: &str,
    theme: &Theme,
) {
    let row: Rect = layout.label_row;
    if row.is_empty() {
        return;
    }
    buf.set_stringn(
        row.x,
        row.y,
        time_label,
        row.width as usize,
        theme.text_style(),
    );
    if !layout.fullscreen.is_empty() {
        buf.set_string(
            layout.fullscreen.x,
            layout.fullscreen.y,
            FULLSCREEN_GLYPH,
            theme.text_style(),
        );
    }
}
