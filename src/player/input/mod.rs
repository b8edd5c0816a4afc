//! Input handling for the player surface.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the surface and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::{handle_mouse_event, press_button, PointerGesture};

use crossterm::event::Event;

use crate::engine::MediaEngine;
use crate::player::render::SurfaceLayout;
use crate::player::state::{InputResult, PlayerSurface};

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `surface` - The player surface
/// * `gesture` - Pointer drag tracking across mouse events
/// * `layout` - Geometry of the most recently drawn frame
///
/// # Returns
/// `InputResult` indicating whether to continue or quit
pub fn handle_event<E: MediaEngine>(
    event: Event,
    surface: &mut PlayerSurface<E>,
    gesture: &mut PointerGesture,
    layout: &SurfaceLayout,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, surface),
        Event::Mouse(mouse) => handle_mouse_event(mouse, surface, gesture, layout),
        // Layout is recomputed on the next draw
        Event::Resize(_, _) => InputResult::Continue,
        _ => InputResult::Continue, // Ignore focus and paste events
    }
}
