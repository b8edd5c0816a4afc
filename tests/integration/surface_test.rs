//! Player surface scenarios: time updates, drag, overlay dwell, lifecycle

use tapseek::engine::{EngineError, EngineTiming, MediaEngine};
use tapseek::player::{OverlayPhase, OverlayTimer, PlayerSurface, SurfaceTiming, Writer};
use tapseek::schedule::{Clock, Scheduler};

use crate::helpers::{ms, recording_surface, secs, simulated_surface, EngineCall, RecordingEngine};

const TRACK_WIDTH: f64 = 62.0;

#[test]
fn ticks_track_engine_position() {
    let mut surface = recording_surface(Some(120.0));

    for (tick, time, expected) in [(1, 30.0, 0.25), (2, 90.0, 0.75), (3, 150.0, 1.0)] {
        surface.engine_mut().unwrap().time = time;
        surface.pump(secs(tick));
        assert_eq!(surface.progress().value(), expected, "t={}", time);
    }
}

#[test]
fn drag_progress_is_monotonic_and_bounded() {
    let mut surface = recording_surface(Some(120.0));
    surface.begin_drag();

    let mut previous = surface.progress().value();
    for dx in (-20..=100).map(f64::from) {
        surface.drag_to(dx, TRACK_WIDTH);
        let progress = surface.progress().value();
        assert!((0.0..=1.0).contains(&progress), "dx={} gave {}", dx, progress);
        assert!(progress >= previous, "dx={} went backwards", dx);
        previous = progress;
    }
    assert_eq!(previous, 1.0);
}

#[test]
fn ticks_do_not_move_thumb_mid_drag() {
    let mut surface = recording_surface(Some(100.0));
    surface.begin_drag();
    surface.drag_to(31.0, TRACK_WIDTH);

    surface.engine_mut().unwrap().time = 10.0;
    surface.pump(secs(1));

    assert_eq!(surface.seek_state().authority(), Writer::Drag);
    assert_eq!(surface.progress().value(), 0.5);
}

#[test]
fn release_commits_and_seeks() {
    let mut surface = recording_surface(Some(120.0));
    surface.begin_drag();
    surface.drag_to(15.5, TRACK_WIDTH);
    surface.end_drag();

    assert_eq!(surface.seek_state().last_committed_progress().value(), 0.25);
    assert_eq!(surface.engine().unwrap().seeks(), vec![0.25]);
    assert_eq!(surface.seek_state().authority(), Writer::SeekSettle);
}

#[test]
fn stale_position_during_settle_is_ignored() {
    let mut surface = recording_surface(Some(100.0));
    surface.pump(ms(900));
    surface.begin_drag();
    surface.drag_to(TRACK_WIDTH / 2.0, TRACK_WIDTH);
    surface.end_drag();

    // Engine still reports the pre-seek position when the 1s tick lands
    surface.engine_mut().unwrap().time = 5.0;
    surface.pump(secs(1));
    assert!(surface.seek_state().is_seek_pending());
    assert_eq!(surface.progress().value(), 0.5);

    // Settle closes at 1.1s, the 2s tick applies again
    surface.engine_mut().unwrap().time = 60.0;
    surface.pump(secs(2));
    assert!(!surface.seek_state().is_seek_pending());
    assert_eq!(surface.progress().value(), 0.6);
}

#[test]
fn drag_to_half_of_two_minutes_shows_one_minute() {
    let timing = EngineTiming {
        seek_latency: ms(120),
        ..EngineTiming::default()
    };
    let (mut surface, clock) = simulated_surface(120.0, timing);

    surface.begin_drag();
    surface.drag_to(TRACK_WIDTH / 2.0, TRACK_WIDTH);
    assert_eq!(surface.progress().value(), 0.5);
    surface.end_drag();

    // Seek has not landed yet
    assert_eq!(surface.time_label(), "00:00");
    assert!(surface.engine().unwrap().is_seeking());

    clock.set(ms(200));
    surface.pump(clock.now());
    assert!(!surface.seek_state().is_seek_pending());

    clock.set(secs(1));
    surface.pump(clock.now());
    assert_eq!(surface.progress().value(), 0.5);
    assert_eq!(surface.time_label(), "01:00");
}

#[test]
fn tap_while_playing_arms_then_second_tap_cancels() {
    let mut surface = recording_surface(Some(120.0));
    surface.toggle_play();

    // Let the hide armed by play run out so the overlay starts hidden
    surface.pump(secs(3));
    assert!(!surface.overlay().visible());

    surface.pump(secs(5));
    surface.tap();
    assert!(surface.overlay().visible());
    assert_eq!(surface.overlay().hide_deadline(), Some(secs(8)));

    surface.pump(secs(6));
    surface.tap();
    assert!(!surface.overlay().visible());
    assert_eq!(surface.overlay().phase(), OverlayPhase::Idle);

    // Nothing left to re-show or re-hide it
    surface.pump(secs(20));
    assert!(!surface.overlay().visible());
}

#[test]
fn overlay_hides_after_dwell_while_playing() {
    let mut surface = recording_surface(Some(120.0));
    surface.tap();
    surface.toggle_play();
    assert!(surface.controls_visible());

    surface.pump(ms(2_999));
    assert!(surface.overlay().visible());
    surface.pump(secs(3));
    assert!(!surface.overlay().visible());
}

#[test]
fn pause_keeps_overlay_up_indefinitely() {
    let mut surface = recording_surface(Some(120.0));
    surface.toggle_play();
    surface.tap();
    assert!(surface.overlay().visible());

    surface.pump(secs(1));
    surface.toggle_play();
    surface.pump(secs(600));

    assert!(surface.overlay().visible());
    assert_eq!(surface.overlay().hide_deadline(), None);
    assert_eq!(
        surface.engine().unwrap().calls,
        vec![EngineCall::Play, EngineCall::Pause]
    );
}

#[test]
fn drag_keeps_overlay_up_and_release_rearms() {
    let mut surface = recording_surface(Some(120.0));
    surface.tap();
    surface.toggle_play();

    surface.pump(secs(1));
    surface.begin_drag();
    assert_eq!(surface.overlay().phase(), OverlayPhase::Idle);
    assert!(!surface.controls_visible());
    assert!(surface.scrim_visible());

    surface.pump(secs(10));
    assert!(surface.overlay().visible());

    surface.drag_to(10.0, TRACK_WIDTH);
    surface.end_drag();
    assert_eq!(surface.overlay().hide_deadline(), Some(secs(13)));
    assert!(surface.controls_visible());
}

#[test]
fn arming_twice_leaves_one_hide() {
    let mut scheduler = Scheduler::new();
    let mut overlay = OverlayTimer::new(secs(3));

    overlay.arm(&mut scheduler, "hide");
    overlay.arm(&mut scheduler, "hide");

    assert_eq!(scheduler.pending(), 1);
    assert_eq!(overlay.phase(), OverlayPhase::Armed);
}

#[test]
fn play_without_duration_is_harmless() {
    let mut surface = recording_surface(None);
    surface.engine_mut().unwrap().time = 5.0;

    surface.toggle_play();
    for tick in 1..=3 {
        surface.pump(secs(tick));
    }
    assert_eq!(surface.progress().value(), 0.0);

    surface.engine_mut().unwrap().duration = Some(0.0);
    surface.pump(secs(4));
    assert_eq!(surface.progress().value(), 0.0);

    surface.engine_mut().unwrap().duration = Some(10.0);
    surface.pump(secs(5));
    assert_eq!(surface.progress().value(), 0.5);
}

#[test]
fn metadata_delay_defers_progress() {
    let timing = EngineTiming {
        metadata_delay: ms(1_500),
        ..EngineTiming::default()
    };
    let (mut surface, clock) = simulated_surface(10.0, timing);
    surface.toggle_play();

    clock.set(secs(1));
    surface.pump(secs(1));
    assert_eq!(surface.duration(), None);
    assert_eq!(surface.progress().value(), 0.0);

    clock.set(secs(2));
    surface.pump(secs(2));
    assert_eq!(surface.duration(), Some(10.0));
    assert_eq!(surface.progress().value(), 0.2);
}

#[test]
fn drag_before_metadata_does_not_move_thumb() {
    let timing = EngineTiming {
        metadata_delay: secs(10),
        ..EngineTiming::default()
    };
    let (mut surface, clock) = simulated_surface(120.0, timing);

    surface.begin_drag();
    surface.drag_to(TRACK_WIDTH / 2.0, TRACK_WIDTH);
    surface.end_drag();
    assert!(!surface.is_dragging());
    assert!(!surface.seek_state().is_seek_pending());

    clock.set(secs(5));
    surface.pump(clock.now());
    assert_eq!(surface.duration(), None);
    assert_eq!(surface.progress().value(), 0.0);
    assert_eq!(surface.seek_state().last_committed_progress().value(), 0.0);
    assert_eq!(surface.time_label(), "00:00");
    assert!(!surface.engine().unwrap().is_seeking());

    // Once metadata is in, the same drag goes through
    clock.set(secs(10));
    surface.pump(clock.now());
    surface.begin_drag();
    surface.drag_to(TRACK_WIDTH / 2.0, TRACK_WIDTH);
    surface.end_drag();
    assert_eq!(surface.progress().value(), 0.5);
    assert!(surface.seek_state().is_seek_pending());
}

#[test]
fn drag_without_duration_never_seeks() {
    let mut surface = recording_surface(None);
    surface.begin_drag();
    surface.drag_to(TRACK_WIDTH / 2.0, TRACK_WIDTH);
    surface.end_drag();

    assert_eq!(surface.progress().value(), 0.0);
    assert!(surface.engine().unwrap().seeks().is_empty());
}

#[test]
fn unavailable_media_yields_disabled_surface() {
    let mut surface: PlayerSurface<RecordingEngine> = PlayerSurface::open(
        Err(EngineError::SourceUnavailable {
            path: "missing.mp4".into(),
        }),
        SurfaceTiming::default(),
    );

    assert!(!surface.is_available());
    surface.tap();
    surface.toggle_play();
    surface.begin_drag();
    surface.drag_to(30.0, TRACK_WIDTH);
    surface.end_drag();
    surface.pump(secs(60));

    assert!(!surface.overlay().visible());
    assert!(!surface.is_playing());
    assert_eq!(surface.progress().value(), 0.0);
    assert_eq!(surface.time_label(), "00:00");
}

#[test]
fn teardown_cancels_everything() {
    let mut surface = recording_surface(Some(120.0));
    surface.tap();
    surface.toggle_play();
    surface.begin_drag();
    surface.end_drag();
    assert!(surface.scheduler().pending() >= 3);

    surface.teardown();
    assert_eq!(surface.scheduler().pending(), 0);
    assert_eq!(surface.pump(secs(60)), 0);

    // Second teardown is a no-op
    surface.teardown();
}

#[test]
fn engine_calls_follow_play_toggle() {
    let mut surface = recording_surface(Some(30.0));
    surface.toggle_play();
    surface.toggle_play();
    surface.toggle_play();

    assert!(surface.is_playing());
    let engine = surface.engine().unwrap();
    assert_eq!(
        engine.calls,
        vec![EngineCall::Play, EngineCall::Pause, EngineCall::Play]
    );
    assert_eq!(engine.current_time(), 0.0);
}
