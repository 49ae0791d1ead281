//! Fullscreen animation playback
//!
//! The player owns the decoded frame sequence and a tiny state machine.
//! Frames advance on wall-clock time rather than host frame rate, so the
//! animation runs at the same speed on a 30 Hz and a 240 Hz client.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::FrameLoadError;
use crate::host::{FRAMES_RESOURCE, ResourceProvider, ScareCanvas};
use crate::overlay::frames::{FrameImage, FrameSequence};

/// Wall-clock time each frame stays on screen (roughly 30 fps)
pub const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Playback state
///
/// `Complete` is sticky until the next [`OverlayPlayer::begin_animation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Playback {
    Idle,
    Playing { frame: usize, advanced_at: Instant },
    Complete,
}

/// Draws the jumpscare animation over the host UI
///
/// Hooked into the host draw callback every frame; renders nothing at all
/// unless an animation is in flight.
pub struct OverlayPlayer {
    frames: Option<FrameSequence>,
    state: Playback,
}

impl OverlayPlayer {
    /// Load the frame archive from `resources` and start idle.
    ///
    /// A failed load leaves the player inert rather than failing the caller;
    /// triggers simply have no animation to show.
    pub fn new(resources: &dyn ResourceProvider) -> Self {
        let frames = match load_frames(resources) {
            Ok(frames) => {
                debug!(count = frames.len(), "Loaded jumpscare frames");
                Some(frames)
            }
            Err(error) => {
                debug!(%error, "Jumpscare frames unavailable");
                None
            }
        };
        Self {
            frames,
            state: Playback::Idle,
        }
    }

    /// Whether the frame archive decoded successfully
    pub fn is_loaded(&self) -> bool {
        self.frames.is_some()
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, Playback::Playing { .. })
    }

    pub fn is_complete(&self) -> bool {
        self.state == Playback::Complete
    }

    /// Index of the frame currently on screen, if playing
    pub fn current_frame(&self) -> Option<usize> {
        match self.state {
            Playback::Playing { frame, .. } => Some(frame),
            _ => None,
        }
    }

    /// Restart the animation from the first frame.
    ///
    /// Restarting mid-flight or after completion is fine; no-op when the
    /// frames never loaded.
    pub fn begin_animation(&mut self) {
        self.begin_at(Instant::now());
    }

    pub(crate) fn begin_at(&mut self, now: Instant) {
        if self.frames.is_none() {
            return;
        }
        self.state = Playback::Playing {
            frame: 0,
            advanced_at: now,
        };
        debug!("Jumpscare animation started");
    }

    /// Host draw callback. Renders the current frame when playing.
    pub fn on_host_draw(&mut self, canvas: &mut dyn ScareCanvas) {
        self.draw_at(canvas, Instant::now());
    }

    pub(crate) fn draw_at(&mut self, canvas: &mut dyn ScareCanvas, now: Instant) {
        let Some(frame) = self.tick(now) else {
            return;
        };
        canvas.begin_frame();
        canvas.draw_image(frame);
        canvas.end_frame();
    }

    /// Advance playback against the wall clock and pick the frame to draw.
    ///
    /// The draw that lands on the final frame still renders it; `Complete`
    /// only suppresses the draws after that.
    fn tick(&mut self, now: Instant) -> Option<&FrameImage> {
        let frames = self.frames.as_ref()?;
        let Playback::Playing { frame, advanced_at } = self.state else {
            return None;
        };

        let (frame, advanced_at) = if now.duration_since(advanced_at) >= FRAME_DURATION {
            (frame + 1, now)
        } else {
            (frame, advanced_at)
        };

        let index = frame.min(frames.last_index());
        if frame >= frames.last_index() {
            self.state = Playback::Complete;
            debug!("Jumpscare animation finished");
        } else {
            self.state = Playback::Playing { frame, advanced_at };
        }
        frames.frame(index)
    }

    /// Drop the decoded frames and return to idle.
    pub fn unload(&mut self) {
        self.frames = None;
        self.state = Playback::Idle;
    }
}

fn load_frames(resources: &dyn ResourceProvider) -> Result<FrameSequence, FrameLoadError> {
    let bytes = resources.bytes(FRAMES_RESOURCE)?;
    FrameSequence::from_zip_bytes(&bytes)
}
