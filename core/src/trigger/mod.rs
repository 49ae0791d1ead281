//! Random trigger clock
//!
//! Accumulates host frame deltas and rolls a 1-in-`odds` trial once per
//! elapsed second. A winning roll fires every subscribed observer
//! synchronously, in subscription order, on the host's update thread.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::SharedConfig;


/// Seconds of accumulated host time between random trials.
pub const CHECK_INTERVAL_SECS: f32 = 1.0;

/// Handle returned by [`TriggerClock::subscribe`], used to unsubscribe.
pub type SubscriberId = u64;

type Observer = Box<dyn FnMut() + Send>;

/// Per-second random jumpscare trigger.
pub struct TriggerClock {
    config: SharedConfig,
    rng: StdRng,
    elapsed: f32,
    observers: Vec<(SubscriberId, Observer)>,
    next_subscriber: SubscriberId,
    trials: u64,
    fires: u64,
}

impl TriggerClock {
    /// Clock seeded from operating-system entropy.
    pub fn new(config: SharedConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Clock with a fixed seed, for replayable sessions and tests.
    pub fn with_seed(config: SharedConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SharedConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            elapsed: 0.0,
            observers: Vec::new(),
            next_subscriber: 0,
            trials: 0,
            fires: 0,
        }
    }

    /// Register an observer invoked synchronously on every fire.
    pub fn subscribe(&mut self, observer: impl FnMut() + Send + 'static) -> SubscriberId {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered observer. Returns false if unknown.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Feed one host frame delta, in seconds.
    ///
    /// Crossing the one-second boundary resets the accumulator and performs
    /// exactly one trial, no matter how large the delta was (a multi-second
    /// stall never produces catch-up trials). While disabled the clock is
    /// paused entirely.
    pub fn advance(&mut self, delta_seconds: f32) {
        let Ok(config) = self.config.read() else {
            return;
        };
        let (enabled, odds) = (config.enabled, config.odds);
        drop(config);

        if !enabled {
            return;
        }

        self.elapsed += delta_seconds;
        if self.elapsed < CHECK_INTERVAL_SECS {
            return;
        }
        self.elapsed = 0.0;
        self.roll(odds);
    }

    fn roll(&mut self, odds: u32) {
        self.trials += 1;
        // A zero denominator would make the range inverted; treat it as 1
        let odds = odds.max(1);
        if self.rng.random_range(1..=odds) != 1 {
            return;
        }

        self.fires += 1;
        debug!(trial = self.trials, odds, "Jumpscare roll hit");
        for (_, observer) in &mut self.observers {
            observer();
        }
    }

    /// Trials performed since construction.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Winning trials since construction.
    pub fn fires(&self) -> u64 {
        self.fires
    }
}
