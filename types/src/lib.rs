//! Shared configuration types for Spook
//!
//! This crate contains the serializable jumpscare settings shared between the
//! runtime (spook-core) and the settings surface (spook-harness). Persistence
//! methods live in the settings surface; the runtime only reads snapshots.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Editable Ranges
// ─────────────────────────────────────────────────────────────────────────────

/// Lowest odds denominator the settings surface allows (most frequent scares).
pub const ODDS_MIN: u32 = 1_000;

/// Highest odds denominator the settings surface allows (rarest scares).
pub const ODDS_MAX: u32 = 50_000;

/// Current on-disk schema version.
pub const CONFIG_VERSION: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Serde Default Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_odds() -> u32 {
    10_000
}
fn default_volume() -> f32 {
    0.8
}

// ─────────────────────────────────────────────────────────────────────────────
// Scare Config
// ─────────────────────────────────────────────────────────────────────────────

/// Persisted jumpscare settings.
///
/// Every field carries a serde default so configs written by older versions
/// deserialize field-by-field instead of failing wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScareConfig {
    /// Schema version of the persisted file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Master switch. While off, no random trials run at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Denominator of the per-second roll: a 1-in-`odds` chance each check.
    #[serde(default = "default_odds")]
    pub odds: u32,

    /// Linear playback volume in [0, 1].
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for ScareConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            enabled: true,
            odds: 10_000,
            volume: 0.8,
        }
    }
}

impl ScareConfig {
    /// Clamp user-editable fields to the ranges the settings surface offers.
    ///
    /// The runtime tolerates out-of-range values (it guards the degenerate
    /// cases itself); this keeps persisted files inside the slider ranges.
    pub fn clamped(mut self) -> Self {
        self.odds = self.odds.clamp(ODDS_MIN, ODDS_MAX);
        self.volume = self.volume.clamp(0.0, 1.0);
        self
    }

    /// Display string for the current odds, e.g. "1 in 10000".
    pub fn odds_label(&self) -> String {
        format!("1 in {}", self.odds)
    }

    /// Volume as a whole percent for display (0-100).
    pub fn volume_percent(&self) -> u8 {
        (self.volume.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}
