//! Seek track rendering.
//!
//! Background bar, filled progress bar, and the thumb.

use ratatui::buffer::Buffer;
use ratatui::style::Style;

use crate::player::render::layout::SeekTrack;
use crate::player::seek::PlaybackProgress;
use crate::theme::Theme;

/// Unfilled part of the track
pub const TRACK_CHAR: char = '─';
/// Filled part of the track
pub const FILLED_CHAR: char = '━';
/// Thumb
pub const THUMB_CHAR: char = '●';

/// Format a duration in seconds to MM:SS format.
///
/// Minutes are not wrapped into hours, so long media reads e.g. `120:00`.
///
/// # Arguments
/// * `seconds` - Duration in seconds
///
/// # Returns
/// A string in MM:SS format
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Build the seek track character array.
///
/// # Arguments
/// * `width` - Width of the track in cells
/// * `progress` - Current progress
/// * `thumb_size` - Thumb width in cells (centered on the playhead)
///
/// # Returns
/// A tuple of (track_chars, filled_count) where filled_count is the number
/// of cells left of the playhead.
pub fn build_seek_track(
    width: usize,
    progress: PlaybackProgress,
    thumb_size: usize,
) -> (Vec<char>, usize) {
    let filled = ((width as f64 * progress.value()) as usize).min(width);

    let mut track: Vec<char> = (0..width)
        .map(|i| if i < filled { FILLED_CHAR } else { TRACK_CHAR })
        .collect();

    if width > 0 {
        let center = filled.min(width - 1);
        let thumb = thumb_size.clamp(1, width);
        let start = center
            .saturating_sub((thumb - 1) / 2)
            .min(width - thumb);
        for cell in &mut track[start..start + thumb] {
            *cell = THUMB_CHAR;
        }
    }

    (track, filled)
}

/// Render the seek track into `buf`.
pub fn render_seek_track(
    buf: &mut Buffer,
    track: &SeekTrack,
    progress: PlaybackProgress,
    theme: &Theme,
) {
    let area = track.area;
    let (chars, _) = build_seek_track(area.width as usize, progress, track.thumb_size as usize);

    for (i, c) in chars.iter().enumerate() {
        let style = match *c {
            TRACK_CHAR => Style::default().fg(theme.track),
            THUMB_CHAR => theme.accent_bold_style(),
            _ => theme.accent_style(),
        };
        let x = area.x + i as u16;
        buf[(x, area.y)].set_char(*c).set_style(style);
    }
}
