//! Capabilities injected by the hosting plugin runtime
//!
//! The core owns no window, render loop, or packaging. The host hands it
//! bundled resource bytes and a drawing surface; everything else stays on
//! the host's side of these traits.

use crate::error::ResourceError;
use crate::overlay::FrameImage;

/// File name of the bundled animation archive (PNG frames, entry-name order).
pub const FRAMES_RESOURCE: &str = "frames.zip";

/// File name of the bundled scream clip.
pub const SCREAM_RESOURCE: &str = "scream.mp3";

/// Lookup of bundled resources by file name.
pub trait ResourceProvider {
    /// Raw bytes of the named resource.
    fn bytes(&self, name: &str) -> Result<Vec<u8>, ResourceError>;
}

/// Full-screen drawing surface supplied by the host on each draw callback.
///
/// Calls always arrive as `begin_frame`, `draw_image`, `end_frame`, in that
/// order, on the host's draw thread. An implementation that pushes style or
/// appearance state in `begin_frame` must unwind all of it in `end_frame`.
/// The pass sits above all other host content and must not intercept input.
pub trait ScareCanvas {
    fn begin_frame(&mut self);

    /// Draw `frame` stretched across the entire canvas.
    fn draw_image(&mut self, frame: &FrameImage);

    fn end_frame(&mut self);
}
