//! Rendering components for the player surface.
//!
//! Everything draws into a ratatui [`Buffer`], so the whole surface can be
//! rendered and inspected in tests without a terminal.

mod controls;
mod help;
mod layout;
mod progress;
mod status;

pub use controls::{button_label, render_controls, render_label_row, FULLSCREEN_GLYPH};
pub use help::{calc_help_start_col, calc_help_start_row, help_lines, render_help, HELP_BOX_WIDTH};
pub use layout::{ControlButton, SeekTrack, SurfaceLayout};
pub use progress::{build_seek_track, format_duration, render_seek_track};
pub use status::{build_status_line, build_unavailable_line, position_text, render_status_line};

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::config::TrackConfig;
use crate::engine::MediaEngine;
use crate::player::state::PlayerSurface;
use crate::theme::Theme;

/// Widget drawing a [`PlayerSurface`].
pub struct SurfaceView<'a, E: MediaEngine> {
    surface: &'a PlayerSurface<E>,
    track: &'a TrackConfig,
    theme: Theme,
}

impl<'a, E: MediaEngine> SurfaceView<'a, E> {
    pub fn new(surface: &'a PlayerSurface<E>, track: &'a TrackConfig) -> Self {
        Self {
            surface,
            track,
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl<E: MediaEngine> Widget for SurfaceView<'_, E> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = SurfaceLayout::compute(area, self.track);
        let surface = self.surface;
        let theme = &self.theme;

        buf.set_style(layout.viewport, theme.viewport_style(surface.scrim_visible()));

        if !surface.is_available() {
            render_unavailable(buf, layout.viewport, theme);
            render_status_line(buf, layout.status, build_unavailable_line(theme));
            return;
        }

        if surface.controls_visible() {
            render_controls(buf, &layout, surface.is_playing(), theme);
        }
        render_label_row(buf, &layout, &surface.time_label(), theme);
        render_seek_track(buf, &layout.track, surface.progress(), theme);
        render_status_line(
            buf,
            layout.status,
            build_status_line(
                surface.is_playing(),
                surface.current_time(),
                surface.duration(),
                theme,
            ),
        );

        if surface.show_help() {
            render_help(buf, area, theme);
        }
    }
}

fn render_unavailable(buf: &mut Buffer, viewport: Rect, theme: &Theme) {
    if viewport.is_empty() {
        return;
    }
    let middle = Rect::new(viewport.x, viewport.y + viewport.height / 2, viewport.width, 1);
    Paragraph::new(Line::from("media unavailable"))
        .style(theme.error_style())
        .alignment(Alignment::Center)
        .render(middle, buf);
}
