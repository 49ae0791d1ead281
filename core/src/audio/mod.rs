//! One-shot scream playback
//!
//! The player hands each playback attempt to a background thread and keeps
//! a single guarded slot tracking whichever attempt currently owns the
//! output sink.

mod player;
mod slot;

#[cfg(test)]
mod player_tests;

pub use player::{AudioPlayer, PlayStats};
