//! Host simulator for the jumpscare core
//!
//! Drives a `JumpscareSystem` the way a plugin host would: a ~60 Hz
//! update/draw loop with measured frame deltas, resources read from a
//! directory, and a session report on exit. Useful for soak-testing odds
//! settings and for reproducing sessions with a fixed seed.

mod config;
mod host;
mod logging;

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::{info, warn};

use spook_core::{Diagnostics, JumpscareSystem, shared_config};
use spook_types::ScareConfig;

use crate::config::ScareConfigExt;
use crate::host::{DirResources, HarnessCanvas};

// ═══════════════════════════════════════════════════════════════════════════
// CLI Arguments
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Parser, Debug)]
#[command(name = "spook-harness")]
#[command(about = "Drive the jumpscare core with a simulated plugin host")]
#[command(version)]
struct Args {
    /// Directory holding frames.zip and scream.mp3
    #[arg(short, long, default_value = "resources")]
    resources: PathBuf,

    /// Session length in seconds
    #[arg(short, long, default_value_t = 30.0)]
    duration: f32,

    /// Fire one jumpscare immediately at startup
    #[arg(long)]
    trigger: bool,

    /// Seed the trigger clock for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Settings Overrides
    // ─────────────────────────────────────────────────────────────────────────
    /// Override the 1-in-X odds denominator (slider range 1000-50000)
    #[arg(long)]
    odds: Option<u32>,

    /// Override playback volume (0.0-1.0)
    #[arg(long)]
    volume: Option<f32>,

    /// Turn the random trigger off for this session
    #[arg(long)]
    disabled: bool,

    /// Persist the effective settings back to the config file
    #[arg(long)]
    save: bool,
}

// ═══════════════════════════════════════════════════════════════════════════
// Main
// ═══════════════════════════════════════════════════════════════════════════

fn main() {
    let args = Args::parse();
    let _guard = logging::init();

    // Settings surface: load, apply overrides, clamp like the editor would
    let mut settings = ScareConfig::load();
    if let Some(odds) = args.odds {
        settings.odds = odds;
    }
    if let Some(volume) = args.volume {
        settings.volume = volume;
    }
    if args.disabled {
        settings.enabled = false;
    }
    let settings = settings.clamped();
    if args.save {
        settings.clone().save();
        info!("Settings saved");
    }

    if !args.resources.is_dir() {
        warn!(
            dir = %args.resources.display(),
            "Resource directory not found, players will stay unloaded"
        );
    }

    info!(
        enabled = settings.enabled,
        odds = settings.odds,
        volume = settings.volume,
        duration = args.duration,
        seed = ?args.seed,
        "Starting simulated host session"
    );

    let config = shared_config(settings.clone());
    let resources = DirResources::new(args.resources.clone());
    let mut system = match args.seed {
        Some(seed) => JumpscareSystem::with_seed(config, &resources, seed),
        None => JumpscareSystem::new(config, &resources),
    };

    if args.trigger {
        system.trigger_now();
    }

    let mut canvas = HarnessCanvas::new();
    let elapsed = run_host_loop(&mut system, &mut canvas, args.duration);

    let diagnostics = system.diagnostics();
    system.dispose();

    print_session_report(&settings, diagnostics, &canvas, elapsed);
}

// ═══════════════════════════════════════════════════════════════════════════
// Host Loop
// ═══════════════════════════════════════════════════════════════════════════

/// Update/draw at roughly 60 Hz with measured deltas until `duration`
/// seconds of wall-clock time pass. Returns the measured session length.
fn run_host_loop(system: &mut JumpscareSystem, canvas: &mut HarnessCanvas, duration: f32) -> f32 {
    let frame_budget = Duration::from_millis(16);
    let session_start = Instant::now();
    let mut last_update = session_start;

    while session_start.elapsed().as_secs_f32() < duration {
        let frame_start = Instant::now();
        let delta = frame_start.duration_since(last_update).as_secs_f32();
        last_update = frame_start;

        system.on_host_update(delta);
        system.on_host_draw(canvas);

        if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    session_start.elapsed().as_secs_f32()
}

// ═══════════════════════════════════════════════════════════════════════════
// Report
// ═══════════════════════════════════════════════════════════════════════════

fn print_session_report(
    settings: &ScareConfig,
    diagnostics: Diagnostics,
    canvas: &HarnessCanvas,
    elapsed: f32,
) {
    println!();
    println!("══════════════════════════════════════════════════════════════════════");
    println!("  SESSION REPORT");
    println!("══════════════════════════════════════════════════════════════════════");
    println!("  Duration:       {elapsed:.1}s");
    println!("  Enabled:        {}", settings.enabled);
    println!("  Odds:           {}", settings.odds_label());
    println!("  Volume:         {}%", settings.volume_percent());
    println!("  Trials:         {}", diagnostics.trials);
    println!("  Fires:          {}", diagnostics.fires);
    println!("  Screams:        {}", diagnostics.plays);
    println!("  Frames drawn:   {}", canvas.draws);
    println!("  Overlay loaded: {}", diagnostics.overlay_loaded);
    println!("  Audio loaded:   {}", diagnostics.audio_loaded);
    println!();
}
