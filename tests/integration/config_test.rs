//! Config file loading and its effect on surface timing

use std::fs;
use std::time::Duration;

use tempfile::TempDir;

use tapseek::config::ConfigError;
use tapseek::player::SurfaceTiming;
use tapseek::Config;

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[player]\ndwell_ms = 5000\n\n[track]\nhit_size = 5\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.player.dwell(), Duration::from_secs(5));
    assert_eq!(config.player.settle(), Duration::from_millis(200));
    assert_eq!(config.track.hit_size, 5);
    assert_eq!(config.track.thumb_size, 1);
    assert_eq!(config.engine.seek_latency(), Duration::from_millis(120));
}

#[test]
fn surface_timing_follows_player_section() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[player]\ndwell_ms = 1500\nsettle_ms = 50\ntime_update_ms = 250\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let timing = SurfaceTiming::from(&config.player);
    assert_eq!(timing.dwell, Duration::from_millis(1_500));
    assert_eq!(timing.settle, Duration::from_millis(50));
    assert_eq!(timing.time_update_interval, Duration::from_millis(250));
}

#[test]
fn invalid_toml_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[player\ndwell_ms = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn saved_file_loads_back_equal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.player.dwell_ms = 4_000;
    config.log.level = "debug".to_string();
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}
