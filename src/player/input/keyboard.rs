//! Keyboard input handling for the player surface.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::engine::MediaEngine;
use crate::player::state::{InputResult, PlayerSurface};

/// Handle a keyboard event.
///
/// Keys stand in for touch input: `t`/Enter is a tap on the surface and the
/// arrow keys are the skip buttons.
pub fn handle_key_event<E: MediaEngine>(
    key: KeyEvent,
    surface: &mut PlayerSurface<E>,
) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if surface.show_help() {
        surface.close_help();
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        KeyCode::Char('?') => {
            surface.toggle_help();
            InputResult::Continue
        }

        // === Playback controls ===
        KeyCode::Char(' ') => {
            surface.toggle_play();
            InputResult::Continue
        }
        KeyCode::Left => {
            surface.skip_backward();
            InputResult::Continue
        }
        KeyCode::Right => {
            surface.skip_forward();
            InputResult::Continue
        }

        // === Surface ===
        KeyCode::Char('t') | KeyCode::Enter => {
            surface.tap();
            InputResult::Continue
        }
        KeyCode::Char('f') => {
            surface.toggle_fullscreen();
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
