//! Surface geometry shared by rendering and pointer hit-testing.

use ratatui::layout::Rect;

use crate::config::TrackConfig;
use crate::player::seek::PlaybackProgress;

/// The seek track row and its thumb geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekTrack {
    pub area: Rect,
    pub thumb_size: u16,
    pub hit_size: u16,
}

impl SeekTrack {
    /// Track width as drag math sees it.
    pub fn width(&self) -> f64 {
        f64::from(self.area.width)
    }

    /// Column under the playhead.
    pub fn thumb_column(&self, progress: PlaybackProgress) -> u16 {
        if self.area.width == 0 {
            return self.area.x;
        }
        let offset = (progress.value() * self.width()) as u16;
        self.area.x + offset.min(self.area.width - 1)
    }

    /// Whether a press at (`column`, `row`) grabs the thumb.
    ///
    /// The grab region is `hit_size` wide, centered on the thumb, and may
    /// overhang the ends of the track.
    pub fn hit_test(&self, column: u16, row: u16, progress: PlaybackProgress) -> bool {
        if row != self.area.y || self.area.width == 0 {
            return false;
        }
        let reach = i32::from(self.hit_size.max(self.thumb_size) / 2);
        let center = i32::from(self.thumb_column(progress));
        (i32::from(column) - center).abs() <= reach
    }
}

/// Which playback button a position falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    SkipBackward,
    PlayPause,
    SkipForward,
}

impl ControlButton {
    pub const ALL: [ControlButton; 3] = [
        ControlButton::SkipBackward,
        ControlButton::PlayPause,
        ControlButton::SkipForward,
    ];
}

/// Regions of the player surface for a given terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceLayout {
    /// Fixed-aspect media viewport
    pub viewport: Rect,
    /// Playback buttons, in [`ControlButton::ALL`] order
    pub buttons: [Rect; 3],
    /// Row holding the time label and fullscreen affordance
    pub label_row: Rect,
    /// Fullscreen affordance cell
    pub fullscreen: Rect,
    pub track: SeekTrack,
    /// Status line under the viewport
    pub status: Rect,
}

impl SurfaceLayout {
    /// Viewport aspect ratio in cells. Terminal cells are about twice as
    /// tall as wide, so 16:9 becomes 32:9.
    pub const ASPECT_COLS: u32 = 32;
    pub const ASPECT_ROWS: u32 = 9;
    pub const MIN_VIEWPORT_ROWS: u16 = 4;
    pub const BUTTON_WIDTH: u16 = 6;
    pub const BUTTON_GAP: u16 = 2;

    pub fn compute(area: Rect, track: &TrackConfig) -> Self {
        let status_rows = area.height.min(1);
        let available = area.height - status_rows;
        let aspect_rows =
            (u32::from(area.width) * Self::ASPECT_ROWS / Self::ASPECT_COLS) as u16;
        let rows = aspect_rows.max(Self::MIN_VIEWPORT_ROWS).min(available);

        let viewport = Rect::new(area.x, area.y, area.width, rows);
        let status = Rect::new(area.x, area.y + rows, area.width, status_rows);

        let last_row = viewport.y + rows.saturating_sub(1);
        let label_y = viewport.y + rows.saturating_sub(2);
        let controls_y = viewport.y + rows.saturating_sub(2) / 2;

        let inner_x = viewport.x + viewport.width.min(1);
        let inner_width = viewport.width.saturating_sub(2);

        let track = SeekTrack {
            area: Rect::new(inner_x, last_row, inner_width, rows.min(1)),
            thumb_size: track.thumb_size.max(1),
            hit_size: track.hit_size.max(track.thumb_size).max(1),
        };

        let label_row = Rect::new(inner_x, label_y, inner_width, rows.min(1));
        let fullscreen = Rect::new(
            (inner_x + inner_width).saturating_sub(1).max(inner_x),
            label_y,
            inner_width.min(1),
            rows.min(1),
        );

        let cluster = Self::BUTTON_WIDTH * 3 + Self::BUTTON_GAP * 2;
        let cluster_x = viewport.x + viewport.width.saturating_sub(cluster) / 2;
        let buttons = [0u16, 1, 2].map(|i| {
            let x = cluster_x + i * (Self::BUTTON_WIDTH + Self::BUTTON_GAP);
            let right = viewport.right();
            let width = Self::BUTTON_WIDTH.min(right.saturating_sub(x));
            Rect::new(x.min(right), controls_y, width, rows.min(1))
        });

        Self {
            viewport,
            buttons,
            label_row,
            fullscreen,
            track,
            status,
        }
    }

    /// Button under (`column`, `row`), if any.
    pub fn button_at(&self, column: u16, row: u16) -> Option<ControlButton> {
        ControlButton::ALL
            .into_iter()
            .zip(self.buttons)
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(button, _)| button)
    }

    pub fn in_viewport(&self, column: u16, row: u16) -> bool {
        contains(self.viewport, column, row)
    }

    pub fn on_fullscreen(&self, column: u16, row: u16) -> bool {
        contains(self.fullscreen, column, row)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}
