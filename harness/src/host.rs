//! Directory-backed host capabilities
//!
//! The simulator stands in for the plugin runtime: resources come from a
//! directory instead of an embedded bundle, and the canvas logs draw calls
//! instead of rendering.

use std::io;
use std::path::PathBuf;

use tracing::debug;

use spook_core::{FrameImage, ResourceError, ResourceProvider, ScareCanvas};

/// Resolves bundled-resource names against a directory.
pub struct DirResources {
    dir: PathBuf,
}

impl DirResources {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl ResourceProvider for DirResources {
    fn bytes(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        let path = self.dir.join(name);
        std::fs::read(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ResourceError::Missing {
                name: name.to_string(),
            },
            _ => ResourceError::Read {
                name: name.to_string(),
                source,
            },
        })
    }
}

/// Canvas that counts calls and logs draw activity.
#[derive(Default)]
pub struct HarnessCanvas {
    pub begins: u64,
    pub draws: u64,
    pub ends: u64,
}

impl HarnessCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScareCanvas for HarnessCanvas {
    fn begin_frame(&mut self) {
        self.begins += 1;
    }

    fn draw_image(&mut self, frame: &FrameImage) {
        self.draws += 1;
        debug!(
            width = frame.width,
            height = frame.height,
            "Drawing jumpscare frame"
        );
    }

    fn end_frame(&mut self) {
        self.ends += 1;
    }
}
