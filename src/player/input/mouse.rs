//! Mouse input handling for the player surface.
//!
//! A left press on the thumb's hit region starts a drag, left-button drag
//! events move it, and the release commits the seek. Any other press on the
//! viewport is a tap, unless it lands on a visible button.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::engine::MediaEngine;
use crate::player::render::{ControlButton, SurfaceLayout};
use crate::player::state::{InputResult, PlayerSurface};

/// Tracks an in-progress thumb drag across mouse events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerGesture {
    drag_origin: Option<u16>,
}

impl PointerGesture {
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }
}

/// Handle a mouse event.
pub fn handle_mouse_event<E: MediaEngine>(
    mouse: MouseEvent,
    surface: &mut PlayerSurface<E>,
    gesture: &mut PointerGesture,
    layout: &SurfaceLayout,
) -> InputResult {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_press(mouse.column, mouse.row, surface, gesture, layout);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(origin) = gesture.drag_origin {
                // Displacement is measured from where the drag began
                let dx = f64::from(mouse.column) - f64::from(origin);
                surface.drag_to(dx, layout.track.width());
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if gesture.drag_origin.take().is_some() {
                surface.end_drag();
            }
        }
        _ => {}
    }

    InputResult::Continue
}

fn handle_press<E: MediaEngine>(
    column: u16,
    row: u16,
    surface: &mut PlayerSurface<E>,
    gesture: &mut PointerGesture,
    layout: &SurfaceLayout,
) {
    if surface.is_available() && layout.track.hit_test(column, row, surface.progress()) {
        gesture.drag_origin = Some(column);
        surface.begin_drag();
        return;
    }

    if surface.controls_visible() {
        if let Some(button) = layout.button_at(column, row) {
            press_button(surface, button);
            return;
        }
    }

    if layout.on_fullscreen(column, row) {
        surface.toggle_fullscreen();
    } else if layout.in_viewport(column, row) {
        surface.tap();
    }
}

/// Activate one of the playback buttons.
pub fn press_button<E: MediaEngine>(surface: &mut PlayerSurface<E>, button: ControlButton) {
    match button {
        ControlButton::SkipBackward => surface.skip_backward(),
        ControlButton::PlayPause => surface.toggle_play(),
        ControlButton::SkipForward => surface.skip_forward(),
    }
}
