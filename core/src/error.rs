//! Error types for resource loading and playback
//!
//! Nothing here is fatal: every failure degrades to "that subsystem does
//! nothing this time" and is logged at debug level by the component that
//! caught it.

use thiserror::Error;

/// Errors locating bundled resources
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("bundled resource '{name}' not found")]
    Missing { name: String },

    #[error("failed to read bundled resource '{name}'")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors while decoding the animation frame archive
#[derive(Debug, Error)]
pub enum FrameLoadError {
    #[error("frame archive unavailable")]
    Resource(#[from] ResourceError),

    #[error("failed to open frame archive")]
    Archive(#[from] zip::result::ZipError),

    #[error("failed to read frame entry '{name}'")]
    Entry {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("frame archive contains no decodable frames")]
    NoFrames,
}

/// Errors while starting scream playback
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("failed to open audio output device")]
    Device(#[from] rodio::StreamError),

    #[error("failed to decode scream clip")]
    Decode(#[from] rodio::decoder::DecoderError),

    #[error("failed to create playback sink")]
    Sink(#[from] rodio::PlayError),
}
