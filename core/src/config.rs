//! Shared jumpscare settings handle
//!
//! The settings surface owns writes and persistence; the runtime reads a
//! snapshot at each decision point and never holds the lock across work.

use std::sync::{Arc, RwLock};

pub use spook_types::ScareConfig;

/// Settings shared between the runtime and the settings surface.
pub type SharedConfig = Arc<RwLock<ScareConfig>>;

/// Wrap settings for sharing with the runtime.
pub fn shared_config(config: ScareConfig) -> SharedConfig {
    Arc::new(RwLock::new(config))
}

/// Read helpers over the shared settings handle.
pub trait SharedConfigExt {
    /// Clone the current settings out of the lock.
    fn snapshot(&self) -> ScareConfig;
}

impl SharedConfigExt for SharedConfig {
    fn snapshot(&self) -> ScareConfig {
        self.read().map(|config| config.clone()).unwrap_or_default()
    }
}
