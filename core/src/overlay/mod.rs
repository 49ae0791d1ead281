//! Full-screen jumpscare animation
//!
//! This module provides:
//! - **Frames**: the RGBA frame sequence decoded from the bundled archive
//! - **Player**: a wall-clock state machine that plays the sequence once
//!
//! Rendering goes through [`crate::host::ScareCanvas`]; the player never
//! touches the host's drawing state directly.

mod frames;
mod player;

#[cfg(test)]
mod frames_tests;

pub use frames::{FrameImage, FrameSequence};
pub use player::{FRAME_DURATION, OverlayPlayer};
