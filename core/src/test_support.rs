//! Shared fixtures for the crate's test modules
//!
//! Resources are built in memory so tests never touch the filesystem or an
//! audio device.

use std::collections::HashMap;
use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::ResourceError;
use crate::host::{ResourceProvider, ScareCanvas};
use crate::overlay::FrameImage;

// ═══════════════════════════════════════════════════════════════════════════
// Resource Provider
// ═══════════════════════════════════════════════════════════════════════════

/// In-memory resource provider
#[derive(Default)]
pub struct StaticResources {
    entries: HashMap<String, Vec<u8>>,
}

impl StaticResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, bytes: Vec<u8>) -> Self {
        self.entries.insert(name.to_string(), bytes);
        self
    }
}

impl ResourceProvider for StaticResources {
    fn bytes(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| ResourceError::Missing {
                name: name.to_string(),
            })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Canvas
// ═══════════════════════════════════════════════════════════════════════════

/// Canvas that records draw calls instead of rendering
#[derive(Default)]
pub struct RecordingCanvas {
    pub begins: usize,
    pub ends: usize,
    /// Width and height of every frame drawn, in draw order
    pub drawn: Vec<(u32, u32)>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draws(&self) -> usize {
        self.drawn.len()
    }

    pub fn last_width(&self) -> Option<u32> {
        self.drawn.last().map(|&(width, _)| width)
    }

    pub fn drawn_widths(&self) -> Vec<u32> {
        self.drawn.iter().map(|&(width, _)| width).collect()
    }
}

impl ScareCanvas for RecordingCanvas {
    fn begin_frame(&mut self) {
        self.begins += 1;
    }

    fn draw_image(&mut self, frame: &FrameImage) {
        self.drawn.push((frame.width, frame.height));
    }

    fn end_frame(&mut self) {
        self.ends += 1;
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Encoded Fixtures
// ═══════════════════════════════════════════════════════════════════════════

/// Encode a solid mid-gray PNG of the given color type.
pub fn encode_png_as(color: png::ColorType, width: u32, height: u32) -> Vec<u8> {
    let samples = match color {
        png::ColorType::Rgba => 4,
        png::ColorType::Rgb => 3,
        png::ColorType::GrayscaleAlpha => 2,
        _ => 1,
    };
    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer
        .write_image_data(&vec![0x7f; (width * height) as usize * samples])
        .unwrap();
    writer.finish().unwrap();
    out
}

/// Encode a solid RGBA PNG.
pub fn encode_png(width: u32, height: u32) -> Vec<u8> {
    encode_png_as(png::ColorType::Rgba, width, height)
}

/// Build a ZIP archive from (entry name, entry bytes) pairs.
pub fn make_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, data) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Archive of RGBA frames, one per width, named in play order.
pub fn make_frame_archive(widths: &[u32]) -> Vec<u8> {
    let encoded: Vec<(String, Vec<u8>)> = widths
        .iter()
        .enumerate()
        .map(|(index, &width)| (format!("frame_{index:03}.png"), encode_png(width, 2)))
        .collect();
    let entries: Vec<(&str, &[u8])> = encoded
        .iter()
        .map(|(name, data)| (name.as_str(), data.as_slice()))
        .collect();
    make_archive(&entries)
}
