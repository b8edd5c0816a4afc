//! Help overlay rendering.
//!
//! Displays a centered box listing every input the player accepts.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::Theme;

/// Key / description pairs, grouped by section. An empty key starts a
/// section heading.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "Playback"),
    ("Space", "Play / pause"),
    ("Left/Right", "Skip back / forward"),
    ("", "Surface"),
    ("t / Enter", "Show / hide controls"),
    ("Click", "Show / hide controls"),
    ("Drag thumb", "Seek"),
    ("f", "Fullscreen"),
    ("", "General"),
    ("?", "Show this help"),
    ("q / Esc", "Quit player"),
];

/// Inner width of the help box, between the borders.
pub const HELP_INNER_WIDTH: usize = 36;

/// Total width of the help box including borders.
pub const HELP_BOX_WIDTH: usize = HELP_INNER_WIDTH + 2;

const TITLE: &str = "tapseek help";
const FOOTER: &str = "Press any key to close";

/// Build the framed help box.
pub fn help_lines() -> Vec<String> {
    let rule = "═".repeat(HELP_INNER_WIDTH);
    let blank = format!("║{}║", " ".repeat(HELP_INNER_WIDTH));
    let center = |text: &str| format!("║{:^width$}║", text, width = HELP_INNER_WIDTH);

    let mut lines = vec![format!("╔{}╗", rule), center(TITLE), format!("╠{}╣", rule)];
    for (key, description) in HELP_ENTRIES {
        if key.is_empty() {
            lines.push(blank.clone());
            lines.push(format!("║ {:<width$}║", description, width = HELP_INNER_WIDTH - 1));
        } else {
            lines.push(format!(
                "║   {:<12}{:<width$}║",
                key,
                description,
                width = HELP_INNER_WIDTH - 15
            ));
        }
    }
    lines.push(blank);
    lines.push(center(FOOTER));
    lines.push(format!("╚{}╝", rule));
    lines
}

/// Calculate the starting row for centering the help box.
pub fn calc_help_start_row(term_height: u16, box_height: u16) -> u16 {
    term_height.saturating_sub(box_height) / 2
}

/// Calculate the starting column for centering the help box.
pub fn calc_help_start_col(term_width: u16) -> u16 {
    ((term_width as usize).saturating_sub(HELP_BOX_WIDTH) / 2) as u16
}

/// Render the help overlay centered in `area`.
pub fn render_help(buf: &mut Buffer, area: Rect, theme: &Theme) {
    let lines = help_lines();
    let height = (lines.len() as u16).min(area.height);
    let width = (HELP_BOX_WIDTH as u16).min(area.width);
    let rect = Rect::new(
        area.x + calc_help_start_col(area.width),
        area.y + calc_help_start_row(area.height, lines.len() as u16),
        width,
        height,
    );
    Clear.render(rect, buf);

    let style = Style::default().fg(theme.success);
    for (i, line) in lines.iter().take(height as usize).enumerate() {
        buf.set_stringn(rect.x, rect.y + i as u16, line, rect.width as usize, style);
    }
}
