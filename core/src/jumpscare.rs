//! Jumpscare owner
//!
//! The host constructs one `JumpscareSystem`, feeds it the per-frame update
//! and draw callbacks, and disposes it once on unload. The system wires the
//! trigger clock's fire event to the overlay and audio players and gates
//! every host-facing entry point after disposal.

use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::audio::AudioPlayer;
use crate::config::SharedConfig;
use crate::host::{ResourceProvider, ScareCanvas};
use crate::overlay::OverlayPlayer;
use crate::trigger::TriggerClock;

/// Point-in-time counter snapshot for the status surface
#[derive(Clone, Copy, Debug, Default)]
pub struct Diagnostics {
    /// Random trials the clock has performed
    pub trials: u64,
    /// Trials that came up 1 and fired
    pub fires: u64,
    /// Audio playback attempts started
    pub plays: u64,
    /// Volume applied to the most recent playback attempt
    pub last_volume: f32,
    pub overlay_loaded: bool,
    pub audio_loaded: bool,
}

/// Owns the clock and both players for one host session
pub struct JumpscareSystem {
    config: SharedConfig,
    clock: TriggerClock,
    overlay: Arc<Mutex<OverlayPlayer>>,
    audio: Arc<AudioPlayer>,
    disposed: bool,
}

impl JumpscareSystem {
    pub fn new(config: SharedConfig, resources: &dyn ResourceProvider) -> Self {
        Self::build(config, resources, None)
    }

    /// Seeded variant for reproducible sessions.
    pub fn with_seed(config: SharedConfig, resources: &dyn ResourceProvider, seed: u64) -> Self {
        Self::build(config, resources, Some(seed))
    }

    fn build(config: SharedConfig, resources: &dyn ResourceProvider, seed: Option<u64>) -> Self {
        let overlay = Arc::new(Mutex::new(OverlayPlayer::new(resources)));
        let audio = Arc::new(AudioPlayer::new(Arc::clone(&config), resources));

        let mut clock = match seed {
            Some(seed) => TriggerClock::with_seed(Arc::clone(&config), seed),
            None => TriggerClock::new(Arc::clone(&config)),
        };
        let overlay_on_fire = Arc::clone(&overlay);
        let audio_on_fire = Arc::clone(&audio);
        clock.subscribe(move || fire_players(&overlay_on_fire, &audio_on_fire));

        info!("Jumpscare system ready");
        Self {
            config,
            clock,
            overlay,
            audio,
            disposed: false,
        }
    }

    /// Host per-frame update callback.
    pub fn on_host_update(&mut self, delta_seconds: f32) {
        if self.disposed {
            return;
        }
        self.clock.advance(delta_seconds);
    }

    /// Host per-frame draw callback.
    pub fn on_host_draw(&mut self, canvas: &mut dyn ScareCanvas) {
        if self.disposed {
            return;
        }
        if let Ok(mut overlay) = self.overlay.lock() {
            overlay.on_host_draw(canvas);
        }
    }

    /// Fire the jumpscare immediately, bypassing the enabled gate and the
    /// odds roll.
    pub fn trigger_now(&self) {
        if self.disposed {
            return;
        }
        debug!("Manual jumpscare trigger");
        fire_players(&self.overlay, &self.audio);
    }

    pub fn config(&self) -> SharedConfig {
        Arc::clone(&self.config)
    }

    pub fn is_animating(&self) -> bool {
        self.overlay
            .lock()
            .map(|overlay| overlay.is_playing())
            .unwrap_or(false)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn diagnostics(&self) -> Diagnostics {
        let audio_stats = self.audio.stats();
        let overlay_loaded = self
            .overlay
            .lock()
            .map(|overlay| overlay.is_loaded())
            .unwrap_or(false);
        Diagnostics {
            trials: self.clock.trials(),
            fires: self.clock.fires(),
            plays: audio_stats.plays,
            last_volume: audio_stats.last_volume,
            overlay_loaded,
            audio_loaded: self.audio.is_loaded(),
        }
    }

    /// Tear down in host order: gate the host-facing callbacks first, then
    /// stop and release both players. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.audio.dispose();
        if let Ok(mut overlay) = self.overlay.lock() {
            overlay.unload();
        }
        info!("Jumpscare system disposed");
    }
}

/// Fan one fire event out to both players. Overlay first, then audio; both
/// are idempotent restarts.
fn fire_players(overlay: &Mutex<OverlayPlayer>, audio: &AudioPlayer) {
    if let Ok(mut overlay) = overlay.lock() {
        overlay.begin_animation();
    }
    audio.play();
}
