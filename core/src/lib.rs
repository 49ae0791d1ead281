pub mod audio;
pub mod config;
pub mod error;
pub mod host;
pub mod jumpscare;
pub mod overlay;
pub mod trigger;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use audio::{AudioPlayer, PlayStats};
pub use config::{ScareConfig, SharedConfig, SharedConfigExt, shared_config};
pub use error::{FrameLoadError, PlaybackError, ResourceError};
pub use host::{FRAMES_RESOURCE, SCREAM_RESOURCE, ResourceProvider, ScareCanvas};
pub use jumpscare::{Diagnostics, JumpscareSystem};
pub use overlay::{FRAME_DURATION, FrameImage, FrameSequence, OverlayPlayer};
pub use trigger::{CHECK_INTERVAL_SECS, SubscriberId, TriggerClock};
