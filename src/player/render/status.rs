//! Status line rendering.
//!
//! Displays playback state, position/duration, and keyboard shortcuts.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::engine::usable_duration;
use crate::player::render::progress::format_duration;
use crate::theme::Theme;

/// Key hints shown after the playback state.
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("space", "play"),
    ("t", "tap"),
    ("←/→", "skip"),
    ("?", "help"),
    ("q", "quit"),
];

/// Position/duration text, `--:--` for an unknown duration.
pub fn position_text(current: f64, duration: Option<f64>) -> String {
    let total = usable_duration(duration).map_or_else(|| "--:--".to_string(), format_duration);
    format!("{}/{}", format_duration(current), total)
}

/// Build the status line for an available surface.
pub fn build_status_line(
    playing: bool,
    current: f64,
    duration: Option<f64>,
    theme: &Theme,
) -> Line<'static> {
    let state = if playing { " ▶ playing " } else { " ❚❚ paused " };
    let mut spans = vec![
        Span::styled(state, theme.text_style()),
        Span::styled(position_text(current, duration), theme.text_style()),
        Span::styled(" │ ", theme.text_secondary_style()),
    ];
    for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(*key, theme.accent_style()));
        spans.push(Span::styled(
            format!(":{}", action),
            theme.text_secondary_style(),
        ));
    }
    Line::from(spans)
}

/// Status line for a surface without media.
pub fn build_unavailable_line(theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(" media unavailable ", theme.error_style()),
        Span::styled("│ ", theme.text_secondary_style()),
        Span::styled("q", theme.accent_style()),
        Span::styled(":quit", theme.text_secondary_style()),
    ])
}

pub fn render_status_line(buf: &mut Buffer, area: Rect, line: Line<'static>) {
    if area.is_empty() {
        return;
    }
    line.render(area, buf);
}
