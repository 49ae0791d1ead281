//! Audio player tests
//!
//! These run without an output device: counters and the volume snapshot
//! are recorded on the caller thread, and the background step swallows its
//! own failures.

use std::sync::Arc;

use super::player::AudioPlayer;
use crate::config::{SharedConfig, shared_config};
use crate::host::SCREAM_RESOURCE;
use crate::test_support::StaticResources;
use spook_types::ScareConfig;

// ═══════════════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════════════

/// Player with clip bytes present and the given volume configured.
fn make_player(volume: f32) -> (AudioPlayer, SharedConfig) {
    let config = shared_config(ScareConfig {
        volume,
        ..ScareConfig::default()
    });
    let resources = StaticResources::new().with(SCREAM_RESOURCE, b"not real audio".to_vec());
    let player = AudioPlayer::new(Arc::clone(&config), &resources);
    (player, config)
}

// ═══════════════════════════════════════════════════════════════════════════
// Playback Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_clip_plays_nothing() {
    let config = shared_config(ScareConfig::default());
    let player = AudioPlayer::new(config, &StaticResources::new());
    assert!(!player.is_loaded());

    player.play();
    assert_eq!(player.stats().plays, 0);
}

#[test]
fn test_play_snapshots_the_configured_volume() {
    let (player, config) = make_player(0.35);
    assert!(player.is_loaded());

    player.play();
    let stats = player.stats();
    assert_eq!(stats.plays, 1);
    assert_eq!(stats.last_volume, 0.35);

    if let Ok(mut config) = config.write() {
        config.volume = 0.9;
    }
    player.play();
    assert_eq!(player.stats().plays, 2);
    assert_eq!(player.stats().last_volume, 0.9);
}

#[test]
fn test_volume_clamped_into_unit_range() {
    let (player, config) = make_player(2.5);
    player.play();
    assert_eq!(player.stats().last_volume, 1.0);

    if let Ok(mut config) = config.write() {
        config.volume = -3.0;
    }
    player.play();
    assert_eq!(player.stats().last_volume, 0.0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Dispose Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_disposed_player_refuses_new_screams() {
    let (player, _config) = make_player(0.5);
    player.play();
    assert_eq!(player.stats().plays, 1);

    player.dispose();
    player.play();
    assert_eq!(player.stats().plays, 1);
}

#[test]
fn test_dispose_is_idempotent() {
    let (player, _config) = make_player(0.5);
    player.dispose();
    player.dispose();
    assert_eq!(player.stats().plays, 0);
}
