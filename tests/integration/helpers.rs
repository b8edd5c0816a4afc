//! Shared fixtures for integration tests

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use tapseek::config::TrackConfig;
use tapseek::engine::{EngineTiming, MediaEngine, SimulatedEngine};
use tapseek::player::render::SurfaceView;
use tapseek::player::{PlayerSurface, SurfaceTiming};
use tapseek::schedule::ManualClock;

/// Engine call, in the order the surface made it.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Play,
    Pause,
    Seek(f64),
}

/// Engine that records every call and reports whatever position and
/// duration the test sets.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub time: f64,
    pub duration: Option<f64>,
    pub calls: Vec<EngineCall>,
}

impl RecordingEngine {
    pub fn with_duration(duration: Option<f64>) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn seeks(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                EngineCall::Seek(fraction) => Some(*fraction),
                _ => None,
            })
            .collect()
    }
}

impl MediaEngine for RecordingEngine {
    fn play(&mut self) {
        self.calls.push(EngineCall::Play);
    }

    fn pause(&mut self) {
        self.calls.push(EngineCall::Pause);
    }

    fn seek(&mut self, fraction: f64) {
        self.calls.push(EngineCall::Seek(fraction));
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

pub fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

pub fn recording_surface(duration: Option<f64>) -> PlayerSurface<RecordingEngine> {
    PlayerSurface::new(
        RecordingEngine::with_duration(duration),
        SurfaceTiming::default(),
    )
}

/// Surface over a simulated engine, plus the clock driving that engine.
pub fn simulated_surface(
    duration: f64,
    timing: EngineTiming,
) -> (PlayerSurface<SimulatedEngine<ManualClock>>, ManualClock) {
    let clock = ManualClock::new();
    let engine = SimulatedEngine::with_duration(duration, clock.clone(), timing);
    (PlayerSurface::new(engine, SurfaceTiming::default()), clock)
}

/// Render a surface into a fresh buffer.
pub fn render<E: MediaEngine>(surface: &PlayerSurface<E>, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    SurfaceView::new(surface, &TrackConfig::default()).render(area, &mut buf);
    buf
}

/// Text of one buffer row.
pub fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol())
        .collect::<String>()
}
