//! Settings persistence
//!
//! The harness is the settings surface: it loads the persisted config,
//! applies CLI overrides, clamps to the editable ranges, and saves. The
//! core never writes configuration.

use spook_types::ScareConfig;

/// Extension trait for ScareConfig persistence
pub trait ScareConfigExt {
    fn load() -> Self;
    fn save(self);
}

impl ScareConfigExt for ScareConfig {
    fn load() -> Self {
        confy::load("spook", "config").unwrap_or_default()
    }

    fn save(self) {
        confy::store("spook", "config", self).expect("Failed to save configuration");
    }
}
