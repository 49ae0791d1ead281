//! Active playback bookkeeping
//!
//! One scream plays at a time. Starting a new one must stop the previous,
//! and the background thread finishing an old playback must never release
//! the handle a newer playback now owns. Each attempt claims a generation
//! number; the slot only honors requests from the generation that owns it.
//! The mutex is held for bookkeeping only, never across device calls.

use std::sync::Mutex;

/// Claim ticket identifying one playback attempt
pub(crate) type Generation = u64;

struct SlotState<H> {
    active: Option<(Generation, H)>,
    next_generation: Generation,
    disposed: bool,
}

/// Mutex-guarded owner of the live playback handle
///
/// `H` is the playback handle; production uses `Arc<rodio::Sink>`.
pub(crate) struct PlaybackSlot<H> {
    state: Mutex<SlotState<H>>,
}

impl<H> PlaybackSlot<H> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SlotState {
                active: None,
                next_generation: 0,
                disposed: false,
            }),
        }
    }

    /// Claim a generation for a new playback attempt.
    ///
    /// Returns the claimed generation and the superseded handle, which the
    /// caller stops outside the lock. `None` once disposed.
    pub fn begin(&self) -> Option<(Generation, Option<H>)> {
        let mut state = self.state.lock().ok()?;
        if state.disposed {
            return None;
        }
        let generation = state.next_generation;
        state.next_generation += 1;
        let previous = state.active.take();
        Some((generation, previous.map(|(_, handle)| handle)))
    }

    /// Install the handle for `generation`, unless a newer attempt has
    /// claimed the slot or the slot was disposed in the meantime.
    ///
    /// On rejection the handle comes back so the caller can stop it.
    pub fn publish(&self, generation: Generation, handle: H) -> Result<(), H> {
        let Ok(mut state) = self.state.lock() else {
            return Err(handle);
        };
        if state.disposed || generation + 1 != state.next_generation {
            return Err(handle);
        }
        state.active = Some((generation, handle));
        Ok(())
    }

    /// Release the slot if `generation` still owns it.
    ///
    /// Called when a playback finishes naturally; a stale generation finds
    /// the slot owned by someone newer and leaves it alone.
    pub fn clear_if_current(&self, generation: Generation) -> Option<H> {
        let mut state = self.state.lock().ok()?;
        match state.active {
            Some((owner, _)) if owner == generation => {
                state.active.take().map(|(_, handle)| handle)
            }
            _ => None,
        }
    }

    /// Mark the slot disposed and take whatever handle is active.
    ///
    /// Idempotent; later `begin` and `publish` calls are refused.
    pub fn dispose(&self) -> Option<H> {
        let mut state = self.state.lock().ok()?;
        state.disposed = true;
        state.active.take().map(|(_, handle)| handle)
    }

    #[cfg(test)]
    pub fn active_handle(&self) -> Option<H>
    where
        H: Clone,
    {
        let state = self.state.lock().ok()?;
        state.active.as_ref().map(|(_, handle)| handle.clone())
    }

    #[cfg(test)]
    pub fn is_disposed(&self) -> bool {
        self.state.lock().map(|state| state.disposed).unwrap_or(true)
    }
}
