//! Terminal front end for the player surface.
//!
//! Owns the terminal for the lifetime of a session: raw mode, alternate
//! screen and mouse capture are entered on start and restored on exit,
//! including when the loop bails out with an error.

use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::config::{Config, TrackConfig};
use crate::engine::{EngineTiming, MediaEngine, MediaSource, SimulatedEngine};
use crate::player::input::{handle_event, PointerGesture};
use crate::player::render::{SurfaceLayout, SurfaceView};
use crate::player::state::{InputResult, PlayerSurface, SurfaceTiming};
use crate::schedule::{Clock, MonotonicClock};
use crate::theme::Theme;

/// Upper bound on how long the loop waits for input before redrawing.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// How a player session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user closed the player
    Closed(String),
    /// The media could not be opened; the user closed the disabled surface
    Unavailable(String),
}

/// Restores the terminal when dropped.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )
        .context("Failed to set up terminal")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            LeaveAlternateScreen,
            cursor::Show
        );
        let _ = disable_raw_mode();
    }
}

/// Play `path` in the terminal until the user quits.
///
/// The media is modeled by a [`SimulatedEngine`] of `duration_secs`. If the
/// file cannot be opened the surface still comes up, disabled.
#[cfg(not(tarpaulin_include))]
pub fn play_session(path: &Path, duration_secs: f64, config: &Config) -> Result<SessionEnd> {
    let clock = MonotonicClock::new();
    let timing = EngineTiming {
        seek_latency: config.engine.seek_latency(),
        metadata_delay: config.engine.metadata_delay(),
    };

    let source = MediaSource::open(path, duration_secs);
    let name = match &source {
        Ok(source) => source.name(),
        Err(_) => path.display().to_string(),
    };
    let engine = source.map(|source| SimulatedEngine::new(&source, clock, timing));
    let mut surface = PlayerSurface::open(engine, SurfaceTiming::from(&config.player));
    info!(media = %name, available = surface.is_available(), "player session started");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")?;
    let outcome = run_surface(
        &mut terminal,
        &mut surface,
        &clock,
        &config.track,
        Theme::named(config.player.theme),
    );
    drop(terminal);
    drop(guard);

    let available = surface.is_available();
    surface.teardown();
    outcome?;

    info!(media = %name, "player session closed");
    Ok(if available {
        SessionEnd::Closed(name)
    } else {
        SessionEnd::Unavailable(name)
    })
}

/// Drive the surface from terminal events until a quit input.
#[cfg(not(tarpaulin_include))]
fn run_surface<E: MediaEngine>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    surface: &mut PlayerSurface<E>,
    clock: &impl Clock,
    track: &TrackConfig,
    theme: Theme,
) -> Result<()> {
    let mut gesture = PointerGesture::default();

    loop {
        surface.pump(clock.now());
        let layout = draw_frame(terminal, surface, track, theme)?;

        let timeout = poll_timeout(surface.next_deadline(), clock.now());
        if !event::poll(timeout)? {
            continue;
        }
        let event = event::read()?;

        // Timers that came due while waiting fire before the input lands
        surface.pump(clock.now());
        if handle_event(event, surface, &mut gesture, &layout) == InputResult::Quit {
            debug!("quit requested");
            return Ok(());
        }
    }
}

/// Draw one frame and return the geometry it was drawn with.
pub fn draw_frame<B: Backend, E: MediaEngine>(
    terminal: &mut Terminal<B>,
    surface: &mut PlayerSurface<E>,
    track: &TrackConfig,
    theme: Theme,
) -> Result<SurfaceLayout> {
    let mut layout = SurfaceLayout::compute(Rect::default(), track);
    surface.take_needs_render();
    terminal
        .draw(|frame| {
            let area = frame.area();
            layout = SurfaceLayout::compute(area, track);
            frame.render_widget(SurfaceView::new(surface, track).theme(theme), area);
        })
        .context("Failed to draw frame")?;
    Ok(layout)
}

/// How long to wait for input: until the next deadline, capped at
/// [`FRAME_INTERVAL`].
pub fn poll_timeout(next_deadline: Option<Duration>, now: Duration) -> Duration {
    match next_deadline {
        Some(deadline) => deadline.saturating_sub(now).min(FRAME_INTERVAL),
        None => FRAME_INTERVAL,
    }
}
