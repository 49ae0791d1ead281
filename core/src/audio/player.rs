//! Scream playback
//!
//! Decode and device setup run on a detached background thread so the host
//! frame callback never waits on the audio stack. Output streams are not
//! `Send`, so each attempt builds its own stream inside the thread and
//! tears it down when the sink drains.

use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::thread;

use rodio::{Decoder, OutputStream, Sink};
use tracing::debug;

use crate::audio::slot::{Generation, PlaybackSlot};
use crate::config::{SharedConfig, SharedConfigExt};
use crate::error::PlaybackError;
use crate::host::{ResourceProvider, SCREAM_RESOURCE};

/// Playback counters, updated on the caller thread before each attempt
/// spawns its background step.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlayStats {
    /// Playback attempts started
    pub plays: u64,
    /// Volume applied to the most recent attempt
    pub last_volume: f32,
}

/// Plays the scream clip, one attempt at a time
pub struct AudioPlayer {
    config: SharedConfig,
    data: Option<Arc<[u8]>>,
    slot: Arc<PlaybackSlot<Arc<Sink>>>,
    stats: Mutex<PlayStats>,
}

impl AudioPlayer {
    /// Load the clip bytes from `resources` and start with no playback.
    ///
    /// A missing clip leaves the player silent rather than failing the
    /// caller.
    pub fn new(config: SharedConfig, resources: &dyn ResourceProvider) -> Self {
        let data = match resources.bytes(SCREAM_RESOURCE) {
            Ok(bytes) => {
                debug!(len = bytes.len(), "Loaded scream clip");
                Some(Arc::from(bytes))
            }
            Err(error) => {
                debug!(%error, "Scream clip unavailable");
                None
            }
        };
        Self {
            config,
            data,
            slot: Arc::new(PlaybackSlot::new()),
            stats: Mutex::new(PlayStats::default()),
        }
    }

    /// Whether the clip bytes loaded successfully
    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    pub fn stats(&self) -> PlayStats {
        self.stats.lock().map(|stats| *stats).unwrap_or_default()
    }

    /// Start the scream from the beginning, stopping any playback in flight.
    ///
    /// Volume is sampled here on the caller thread; editing the setting
    /// mid-scream does not affect a scream already playing. Every failure
    /// past this point is swallowed on the background thread.
    pub fn play(&self) {
        let Some(data) = self.data.clone() else {
            return;
        };
        let Some((generation, previous)) = self.slot.begin() else {
            return;
        };
        if let Some(previous) = previous {
            previous.stop();
        }

        let volume = self.config.snapshot().volume.clamp(0.0, 1.0);
        if let Ok(mut stats) = self.stats.lock() {
            stats.plays += 1;
            stats.last_volume = volume;
        }

        let slot = Arc::clone(&self.slot);
        thread::spawn(move || {
            if let Err(error) = run_playback(&slot, generation, data, volume) {
                debug!(%error, "Scream playback failed");
            }
        });
    }

    /// Stop playback and refuse further screams. Safe to call repeatedly,
    /// including while a playback thread is mid-flight.
    pub fn dispose(&self) {
        if let Some(active) = self.slot.dispose() {
            active.stop();
        }
    }
}

/// One playback attempt, start to natural end.
fn run_playback(
    slot: &PlaybackSlot<Arc<Sink>>,
    generation: Generation,
    data: Arc<[u8]>,
    volume: f32,
) -> Result<(), PlaybackError> {
    // The output stream is not Send; it lives and dies on this thread.
    let (_stream, handle) = OutputStream::try_default()?;
    let sink = Arc::new(Sink::try_new(&handle)?);
    sink.set_volume(volume);
    let source = Decoder::new(Cursor::new(data))?;

    if let Err(sink) = slot.publish(generation, Arc::clone(&sink)) {
        // A newer scream claimed the slot before this one could start.
        debug!("Scream playback superseded before start");
        sink.stop();
        return Ok(());
    }

    sink.append(source);
    sink.sleep_until_end();
    slot.clear_if_current(generation);
    Ok(())
}
